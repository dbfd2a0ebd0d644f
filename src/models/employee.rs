use serde::{Deserialize, Serialize};

use crate::repository::Entity;

/// Employee as seen by HTTP clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Persisted row of the `emp_db` table. `id` is `None` until storage assigns it.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl EmployeeRecord {
    /// Builds an unsaved record from a model. The model's id is never copied.
    pub fn from_model(employee: &Employee) -> Self {
        Self {
            id: None,
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            email: employee.email.clone(),
        }
    }

    /// Overwrites the mutable fields; the identity is left as is.
    pub fn apply(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.phone = employee.phone.clone();
        self.email = employee.email.clone();
    }
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            phone: record.phone,
            email: record.email,
        }
    }
}

impl Entity for EmployeeRecord {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lodhi(id: Option<i64>) -> Employee {
        Employee {
            id,
            name: "Lodhi".into(),
            phone: "123".into(),
            email: "a@b.com".into(),
        }
    }

    #[test]
    fn from_model_drops_client_supplied_id() {
        let record = EmployeeRecord::from_model(&lodhi(Some(42)));
        assert_eq!(record.id, None);
        assert_eq!(record.name, "Lodhi");
        assert_eq!(record.phone, "123");
        assert_eq!(record.email, "a@b.com");
    }

    #[test]
    fn apply_keeps_identity() {
        let mut record = EmployeeRecord::from_model(&lodhi(None)).with_id(3);
        let changed = Employee {
            id: Some(99),
            name: "Khan".into(),
            phone: "456".into(),
            email: "k@b.com".into(),
        };
        record.apply(&changed);

        assert_eq!(record.id, Some(3));
        assert_eq!(record.name, "Khan");
        assert_eq!(record.phone, "456");
        assert_eq!(record.email, "k@b.com");
    }

    #[test]
    fn model_json_accepts_missing_id() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"Lodhi","phone":"123","email":"a@b.com"}"#).unwrap();
        assert_eq!(employee, lodhi(None));
    }

    #[test]
    fn model_json_serializes_null_id() {
        let json = serde_json::to_value(lodhi(None)).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["name"], "Lodhi");
    }
}
