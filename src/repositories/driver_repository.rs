use crate::dto::driver_dto::CreatedAtRange;
use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, first_name: String, last_name: String) -> Result<Driver, AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO driver (first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(driver)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM driver WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    /// Listado con los límites de `created_at` aplicados en el WHERE
    pub async fn list(&self, range: CreatedAtRange) -> Result<Vec<Driver>, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM driver WHERE 1 = 1");

        if let Some(gte) = range.gte {
            query.push(" AND created_at >= ").push_bind(gte);
        }
        if let Some(lte) = range.lte {
            query.push(" AND created_at <= ").push_bind(lte);
        }
        query.push(" ORDER BY id");

        debug!("🔍 {}", query.sql());
        let drivers = query.build_query_as::<Driver>().fetch_all(&self.pool).await?;

        Ok(drivers)
    }

    /// Reemplaza ambos nombres; `None` si el conductor no existe.
    /// El UPDATE sobre la fila por id hace de comprobación de existencia.
    pub async fn update(
        &self,
        id: i64,
        first_name: String,
        last_name: String,
    ) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE driver
            SET first_name = $2, last_name = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    /// Borra y devuelve la última versión del conductor; `None` si no existe.
    /// En la misma transacción deja sin conductor a sus vehículos.
    pub async fn delete(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let mut tx = self.pool.begin().await?;

        // La primera sentencia escribe, así la transacción toma el lock de escritura
        let Some(driver) =
            sqlx::query_as::<_, Driver>("DELETE FROM driver WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Ok(None);
        };

        let released = sqlx::query(
            "UPDATE vehicle SET driver_id = NULL, updated_at = $2 WHERE driver_id = $1",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        if released > 0 {
            debug!("🔓 {} vehículo(s) liberados al borrar el conductor {}", released, id);
        }
        Ok(Some(driver))
    }
}
