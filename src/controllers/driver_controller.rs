use crate::dto::driver_dto::{DriverFilters, DriverResponse};
use crate::models::driver::DriverRequest;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use sqlx::SqlitePool;
use tracing::{error, info};
use validator::Validate;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: DriverFilters) -> AppResult<Vec<DriverResponse>> {
        let range = filters.parse()?;
        let drivers = self.repository.list(range).await?;
        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<DriverResponse>> {
        let driver = self.repository.find_by_id(id).await?;
        Ok(driver.map(DriverResponse::from))
    }

    pub async fn create(&self, request: DriverRequest) -> AppResult<DriverResponse> {
        request.validate()?;

        // La transacción del repositorio ya hizo rollback si algo falló
        let driver = self
            .repository
            .create(request.first_name, request.last_name)
            .await
            .map_err(|e| {
                error!("❌ Error creando conductor: {}", e);
                AppError::Internal("Error adding driver to the database".to_string())
            })?;

        info!("✅ Conductor {} creado", driver.id);
        Ok(driver.into())
    }

    pub async fn update(&self, id: i64, request: DriverRequest) -> AppResult<DriverResponse> {
        request.validate()?;

        let driver = self
            .repository
            .update(id, request.first_name, request.last_name)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        info!("✏️  Conductor {} actualizado", id);
        Ok(driver.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<DriverResponse> {
        let driver = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", id))?;

        info!("🗑️  Conductor {} eliminado", id);
        Ok(driver.into())
    }
}
