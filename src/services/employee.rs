//! Employee use cases. Translates between the `Employee` model and the
//! persisted `EmployeeRecord`, delegating storage to the injected repository.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeRecord};
use crate::repository::Repository;

pub const SAVED_MESSAGE: &str = "Saved Successfully";
pub const UPDATED_MESSAGE: &str = "Update Successfully";

pub type EmployeeRepository = dyn Repository<EmployeeRecord, i64>;

pub struct EmployeeService {
    repo: Arc<EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_employee(&self, employee: &Employee) -> AppResult<&'static str> {
        let saved = self.repo.save(EmployeeRecord::from_model(employee)).await?;
        info!("Created employee {:?}", saved.id);
        Ok(SAVED_MESSAGE)
    }

    pub async fn read_employee(&self, id: i64) -> AppResult<Employee> {
        let record = self.find_existing(id).await?;
        Ok(record.into())
    }

    pub async fn read_employees(&self) -> AppResult<Vec<Employee>> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    pub async fn update_employee(&self, employee: &Employee, id: i64) -> AppResult<&'static str> {
        let mut record = self.find_existing(id).await?;
        record.apply(employee);
        self.repo.save(record).await?;
        info!("Updated employee {}", id);
        Ok(UPDATED_MESSAGE)
    }

    /// `false` only when the row disappeared between lookup and removal.
    pub async fn delete_employee(&self, id: i64) -> AppResult<bool> {
        let record = self.find_existing(id).await?;
        let deleted = self.repo.delete(&record).await?;
        if deleted {
            info!("Deleted employee {}", id);
        } else {
            warn!("Employee {} vanished before it could be deleted", id);
        }
        Ok(deleted)
    }

    async fn find_existing(&self, id: i64) -> AppResult<EmployeeRecord> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Employee {} not found", id);
            AppError::NotFound(format!("Employee {} not found", id))
        })
    }
}
