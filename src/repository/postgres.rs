use async_trait::async_trait;
use sqlx::PgPool;

use super::{RepoError, RepoResult, Repository};
use crate::models::employee::EmployeeRecord;

/// `emp_db` table backed by PostgreSQL. Each call is a single statement, so
/// atomicity comes from the database.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<EmployeeRecord, i64> for PgEmployeeRepository {
    async fn save(&self, record: EmployeeRecord) -> RepoResult<EmployeeRecord> {
        match record.id {
            None => {
                let saved = sqlx::query_as::<_, EmployeeRecord>(
                    "INSERT INTO emp_db (name, phone, email) VALUES ($1, $2, $3) RETURNING id, name, phone, email",
                )
                .bind(&record.name)
                .bind(&record.phone)
                .bind(&record.email)
                .fetch_one(&self.pool)
                .await?;
                Ok(saved)
            }
            Some(id) => sqlx::query_as::<_, EmployeeRecord>(
                "UPDATE emp_db SET name = $1, phone = $2, email = $3 WHERE id = $4 RETURNING id, name, phone, email",
            )
            .bind(&record.name)
            .bind(&record.phone)
            .bind(&record.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found"))),
        }
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmployeeRecord>> {
        let record = sqlx::query_as::<_, EmployeeRecord>(
            "SELECT id, name, phone, email FROM emp_db WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn find_all(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let records = sqlx::query_as::<_, EmployeeRecord>(
            "SELECT id, name, phone, email FROM emp_db ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn delete(&self, record: &EmployeeRecord) -> RepoResult<bool> {
        let Some(id) = record.id else {
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM emp_db WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RepoResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emp_db")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}
