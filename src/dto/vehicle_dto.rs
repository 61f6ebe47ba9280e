use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

// Response de vehículo
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleResponse {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub plate_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub driver_id: Option<i64>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            plate_number: vehicle.plate_number,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
            driver_id: vehicle.driver_id,
        }
    }
}

// Filtros del listado de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub with_drivers: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentFilter {
    Assigned,
    Unassigned,
}

impl VehicleFilters {
    /// `yes` y `no` filtran; cualquier otro valor se ignora
    pub fn assignment(&self) -> Option<AssignmentFilter> {
        match self.with_drivers.as_deref() {
            Some("yes") => Some(AssignmentFilter::Assigned),
            Some("no") => Some(AssignmentFilter::Unassigned),
            _ => None,
        }
    }
}

// Response de /vehicles/set_driver
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(value: Option<&str>) -> VehicleFilters {
        VehicleFilters {
            with_drivers: value.map(str::to_string),
        }
    }

    #[test]
    fn test_with_drivers_values() {
        assert_eq!(filters(Some("yes")).assignment(), Some(AssignmentFilter::Assigned));
        assert_eq!(filters(Some("no")).assignment(), Some(AssignmentFilter::Unassigned));
        assert_eq!(filters(Some("YES")).assignment(), None);
        assert_eq!(filters(Some("maybe")).assignment(), None);
        assert_eq!(filters(None).assignment(), None);
    }

    #[test]
    fn test_assignment_response_shape() {
        let body = serde_json::to_value(AssignmentResponse { success: false }).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false }));
    }
}
