use crate::dto::vehicle_dto::{AssignmentResponse, VehicleFilters, VehicleResponse};
use crate::models::vehicle::{CreateVehicleRequest, SetDriverRequest, UpdateVehicleRequest};
use crate::repositories::vehicle_repository::{AssignmentOutcome, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError, AppResult};
use sqlx::SqlitePool;
use tracing::{error, info, warn};
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.list(filters.assignment()).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<VehicleResponse>> {
        let vehicle = self.repository.find_by_id(id).await?;
        Ok(vehicle.map(VehicleResponse::from))
    }

    /// Crea el vehículo sin comprobar `driver_id`; se guarda tal cual
    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .repository
            .create(
                request.make,
                request.model,
                request.plate_number,
                request.driver_id,
            )
            .await
            .map_err(|e| {
                error!("❌ Error creando vehículo: {}", e);
                AppError::Internal("Error adding vehicle to the database".to_string())
            })?;

        info!("✅ Vehículo {} creado ({})", vehicle.id, vehicle.plate_number);
        Ok(vehicle.into())
    }

    pub async fn update(&self, id: i64, request: UpdateVehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                request.make,
                request.model,
                request.plate_number,
                request.driver_id,
            )
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        info!("✏️  Vehículo {} actualizado", id);
        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        info!("🗑️  Vehículo {} eliminado", id);
        Ok(vehicle.into())
    }

    pub async fn set_driver(
        &self,
        vehicle_id: i64,
        request: SetDriverRequest,
    ) -> AppResult<AssignmentResponse> {
        let outcome = self.repository.set_driver(vehicle_id, request.driver_id).await?;

        let success = match outcome {
            AssignmentOutcome::VehicleNotFound => return Err(not_found_error("Vehicle", vehicle_id)),
            AssignmentOutcome::Unchanged => {
                warn!(
                    "🚫 Vehículo {}: driver_id {:?} no cambia el estado de asignación",
                    vehicle_id, request.driver_id
                );
                false
            }
            AssignmentOutcome::UnknownDriver => {
                warn!(
                    "🚫 Vehículo {}: el conductor {:?} no existe",
                    vehicle_id, request.driver_id
                );
                false
            }
            AssignmentOutcome::Assigned(vehicle) => {
                match vehicle.driver_id {
                    Some(driver_id) => info!("🔗 Vehículo {} asignado al conductor {}", vehicle.id, driver_id),
                    None => info!("🔓 Vehículo {} liberado", vehicle.id),
                }
                true
            }
        };

        Ok(AssignmentResponse { success })
    }
}
