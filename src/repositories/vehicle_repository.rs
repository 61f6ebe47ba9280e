use crate::dto::vehicle_dto::AssignmentFilter;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

/// Resultado de un intento de asignación de conductor
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    VehicleNotFound,
    /// El estado asignado/no asignado no cambiaría
    Unchanged,
    UnknownDriver,
    Assigned(Vehicle),
}

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        make: String,
        model: String,
        plate_number: String,
        driver_id: Option<i64>,
    ) -> Result<Vehicle, AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicle (make, model, plate_number, created_at, updated_at, driver_id)
            VALUES ($1, $2, $3, $4, $4, $5)
            RETURNING *
            "#,
        )
        .bind(make)
        .bind(model)
        .bind(plate_number)
        .bind(now)
        .bind(driver_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicle WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self, filter: Option<AssignmentFilter>) -> Result<Vec<Vehicle>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM vehicle");

        match filter {
            Some(AssignmentFilter::Assigned) => {
                query.push(" WHERE driver_id IS NOT NULL");
            }
            Some(AssignmentFilter::Unassigned) => {
                query.push(" WHERE driver_id IS NULL");
            }
            None => {}
        }
        query.push(" ORDER BY id");

        debug!("🔍 {}", query.sql());
        let vehicles = query.build_query_as::<Vehicle>().fetch_all(&self.pool).await?;

        Ok(vehicles)
    }

    /// Reemplaza los cuatro campos mutables; `None` si el vehículo no existe.
    /// `driver_id` se guarda tal cual, sin comprobar el conductor.
    pub async fn update(
        &self,
        id: i64,
        make: String,
        model: String,
        plate_number: String,
        driver_id: Option<i64>,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicle
            SET make = $2, model = $3, plate_number = $4, driver_id = $5, updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make)
        .bind(model)
        .bind(plate_number)
        .bind(driver_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("DELETE FROM vehicle WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Asigna o libera el conductor.
    ///
    /// Solo se permiten transiciones entre "con conductor" y "sin conductor":
    /// si `driver_id` no cambia ese estado la petición se rechaza, aunque
    /// apunte a otro conductor. Ambas condiciones viven en un único UPDATE,
    /// así que entre peticiones concurrentes solo una puede cambiar la fila y
    /// las demás ven cero filas afectadas. La lectura posterior solo explica
    /// el rechazo; nunca escribe.
    pub async fn set_driver(
        &self,
        vehicle_id: i64,
        driver_id: Option<i64>,
    ) -> Result<AssignmentOutcome, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicle
            SET driver_id = ?1, updated_at = ?2
            WHERE id = ?3
              AND (driver_id IS NOT NULL) <> (?1 IS NOT NULL)
              AND (?1 IS NULL OR EXISTS (SELECT 1 FROM driver WHERE id = ?1))
            RETURNING *
            "#,
        )
        .bind(driver_id)
        .bind(Utc::now())
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(vehicle) = updated {
            return Ok(AssignmentOutcome::Assigned(vehicle));
        }

        let Some(vehicle) = self.find_by_id(vehicle_id).await? else {
            return Ok(AssignmentOutcome::VehicleNotFound);
        };

        if vehicle.is_assigned() == driver_id.is_some() {
            return Ok(AssignmentOutcome::Unchanged);
        }

        let driver_exists = match driver_id {
            Some(driver_id) => sqlx::query_scalar::<_, i64>("SELECT id FROM driver WHERE id = $1")
                .bind(driver_id)
                .fetch_optional(&self.pool)
                .await?
                .is_some(),
            None => true,
        };

        debug!("🔍 set_driver({}, {:?}) rechazado tras releer la fila", vehicle_id, driver_id);
        Ok(if driver_exists {
            // Otra petición cambió la fila entre el UPDATE y la lectura
            AssignmentOutcome::Unchanged
        } else {
            AssignmentOutcome::UnknownDriver
        })
    }
}
