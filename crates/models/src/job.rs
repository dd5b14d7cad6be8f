use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors;

/// A tracked job application.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub company: String,
    #[sea_orm(column_type = "Text")]
    pub position: String,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub salary: String,
    #[sea_orm(column_type = "Text")]
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Statuses counted individually by the stats endpoint. Any other string is
/// still accepted and only contributes to the total.
pub const TRACKED_STATUSES: [&str; 4] = ["applied", "interview", "offer", "rejected"];

/// Every field of a job a client may write. Absent keys default to `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFields {
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub salary: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub notes: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl JobFields {
    /// Active model with every mutable column set; `id` and `created_at` untouched.
    pub fn active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            company: Set(self.company),
            position: Set(self.position),
            status: Set(self.status),
            date: Set(self.date),
            salary: Set(self.salary),
            location: Set(self.location),
            notes: Set(self.notes),
            created_at: NotSet,
        }
    }
}

pub fn validate_required(fields: &JobFields) -> Result<(), errors::ModelError> {
    if fields.company.is_empty() || fields.position.is_empty() {
        return Err(errors::ModelError::Validation("Company and position are required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, fields: JobFields) -> Result<Model, errors::ModelError> {
    validate_required(&fields)?;

    let mut am = fields.active_model();
    am.created_at = Set(Utc::now());
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(company: &str, position: &str) -> JobFields {
        JobFields {
            company: company.into(),
            position: position.into(),
            status: "applied".into(),
            date: "2024-01-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn company_and_position_are_required() {
        assert!(validate_required(&fields("Acme", "Engineer")).is_ok());
        assert!(matches!(validate_required(&fields("", "Engineer")), Err(errors::ModelError::Validation(_))));
        assert!(matches!(validate_required(&fields("Acme", "")), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn absent_keys_default_to_empty() {
        let parsed: JobFields = serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "position": "Engineer"
        }))
        .unwrap();
        assert_eq!(parsed.status, "");
        assert_eq!(parsed.salary, "");
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn null_values_read_as_empty() {
        let parsed: JobFields = serde_json::from_value(serde_json::json!({
            "company": null,
            "position": "Engineer",
            "salary": null
        }))
        .unwrap();
        assert_eq!(parsed.company, "");
        assert_eq!(parsed.salary, "");
        assert!(validate_required(&parsed).is_err());
    }

    #[test]
    fn active_model_leaves_identity_unset() {
        let am = fields("Acme", "Engineer").active_model();
        assert!(am.id.is_not_set());
        assert!(am.created_at.is_not_set());
        assert_eq!(am.company, Set("Acme".to_string()));
    }
}
