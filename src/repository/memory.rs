use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Entity, RepoError, RepoResult, Repository};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

/// Process-local table guarded by a single mutex. Identities start at 1 and
/// are never reused.
pub struct InMemoryRepository<T> {
    table: Mutex<Table<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn with_table<R>(&self, f: impl FnOnce(&mut Table<T>) -> RepoResult<R>) -> RepoResult<R> {
        let mut table = self.table.lock().map_err(|_| RepoError::Poisoned)?;
        f(&mut table)
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T, i64> for InMemoryRepository<T> {
    async fn save(&self, entity: T) -> RepoResult<T> {
        self.with_table(|table| match entity.id() {
            None => {
                let id = table.next_id;
                table.next_id += 1;
                let stored = entity.with_id(id);
                table.rows.insert(id, stored.clone());
                Ok(stored)
            }
            Some(id) => match table.rows.get_mut(&id) {
                Some(row) => {
                    *row = entity.clone();
                    Ok(entity)
                }
                None => Err(RepoError::NotFound(format!("Row {id} not found"))),
            },
        })
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        self.with_table(|table| Ok(table.rows.get(&id).cloned()))
    }

    async fn find_all(&self) -> RepoResult<Vec<T>> {
        self.with_table(|table| Ok(table.rows.values().cloned().collect()))
    }

    async fn delete(&self, entity: &T) -> RepoResult<bool> {
        let Some(id) = entity.id() else {
            return Ok(false);
        };
        self.with_table(|table| Ok(table.rows.remove(&id).is_some()))
    }

    async fn count(&self) -> RepoResult<u64> {
        self.with_table(|table| Ok(table.rows.len() as u64))
    }
}
