use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Client-facing message for rejections caused by the request itself.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::Model(models::errors::ModelError::Validation(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn validation_message_covers_model_validation() {
        let e: ServiceError = ModelError::Validation("Company and position are required".into()).into();
        assert_eq!(e.validation_message(), Some("Company and position are required"));
        assert_eq!(ServiceError::Db("locked".into()).validation_message(), None);
        assert_eq!(ServiceError::from(ModelError::Db("x".into())).validation_message(), None);
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("job").to_string(), "not found: job not found");
    }
}
