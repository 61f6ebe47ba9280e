//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus requests para CRUD y asignación.
//! Mapea exactamente a la tabla `vehicle`; `driver_id` es la referencia
//! opcional a `driver` (sin restricción en la base de datos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use sqlx::FromRow;
use validator::Validate;

/// Vehicle principal - una fila de la tabla vehicle
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub plate_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub driver_id: Option<i64>,
}

impl Vehicle {
    pub fn is_assigned(&self) -> bool {
        self.driver_id.is_some()
    }
}

/// Request para crear un nuevo vehículo; `driver_id` puede faltar o ser null
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub plate_number: String,

    #[serde(default)]
    pub driver_id: Option<i64>,
}

/// Request para reemplazar un vehículo: los cuatro campos son obligatorios,
/// `driver_id` puede ser null pero no puede faltar
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub plate_number: String,

    #[serde(deserialize_with = "required_nullable")]
    pub driver_id: Option<i64>,
}

/// Request para asignar (id) o liberar (null) el conductor de un vehículo
#[derive(Debug, Clone, Deserialize)]
pub struct SetDriverRequest {
    #[serde(deserialize_with = "required_nullable")]
    pub driver_id: Option<i64>,
}

// Con deserialize_with serde exige la clave aunque el tipo sea Option
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_driver_id_optional() {
        let request: CreateVehicleRequest = serde_json::from_value(json!({
            "make": "Renault",
            "model": "Master",
            "plate_number": "AB-123-CD"
        }))
        .unwrap();
        assert_eq!(request.driver_id, None);
    }

    #[test]
    fn test_update_request_requires_driver_id_key() {
        let missing = serde_json::from_value::<UpdateVehicleRequest>(json!({
            "make": "Renault",
            "model": "Master",
            "plate_number": "AB-123-CD"
        }));
        assert!(missing.is_err());

        let explicit_null: UpdateVehicleRequest = serde_json::from_value(json!({
            "make": "Renault",
            "model": "Master",
            "plate_number": "AB-123-CD",
            "driver_id": null
        }))
        .unwrap();
        assert_eq!(explicit_null.driver_id, None);
    }

    #[test]
    fn test_set_driver_request() {
        let assign: SetDriverRequest = serde_json::from_value(json!({ "driver_id": 3 })).unwrap();
        assert_eq!(assign.driver_id, Some(3));

        let release: SetDriverRequest =
            serde_json::from_value(json!({ "driver_id": null })).unwrap();
        assert_eq!(release.driver_id, None);

        assert!(serde_json::from_value::<SetDriverRequest>(json!({})).is_err());
    }
}
