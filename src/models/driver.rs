//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y el request para crear/actualizar.
//! Mapea exactamente a la tabla `driver` con primary key entera 'id'.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// Driver principal - una fila de la tabla driver
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Driver {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request para crear o reemplazar un conductor (POST y PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DriverRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_driver_request_requires_both_names() {
        let missing = serde_json::from_value::<DriverRequest>(json!({ "first_name": "Ana" }));
        assert!(missing.is_err());

        let request: DriverRequest =
            serde_json::from_value(json!({ "first_name": "Ana", "last_name": "Ruiz" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_driver_request_length_limits() {
        let request = DriverRequest {
            first_name: "x".repeat(51),
            last_name: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }
}
