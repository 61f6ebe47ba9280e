use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;
use crate::utils::errors::{bad_request_error, AppResult};

// Response de conductor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DriverResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            created_at: driver.created_at,
            updated_at: driver.updated_at,
        }
    }
}

// Filtros del listado: límites inclusivos sobre created_at
#[derive(Debug, Default, Deserialize)]
pub struct DriverFilters {
    pub created_at_gte: Option<String>,
    pub created_at_lte: Option<String>,
}

/// Rango ya interpretado, listo para empujarse a la consulta SQL
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CreatedAtRange {
    pub gte: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl DriverFilters {
    pub fn parse(&self) -> AppResult<CreatedAtRange> {
        Ok(CreatedAtRange {
            gte: parse_bound("created_at_gte", self.created_at_gte.as_deref())?,
            lte: parse_bound("created_at_lte", self.created_at_lte.as_deref())?,
        })
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value).map(Some).ok_or_else(|| {
            bad_request_error(&format!(
                "{} must be an ISO-8601 date or datetime, got '{}'",
                name, value
            ))
        }),
    }
}

/// Acepta RFC 3339, fecha-hora sin zona (UTC) o solo fecha (medianoche UTC)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T12:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T14:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01 12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T12:30"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("01-03-2024"), None);
    }

    #[test]
    fn test_filters_absent_bounds_are_not_applied() {
        let range = DriverFilters::default().parse().unwrap();
        assert_eq!(range, CreatedAtRange::default());

        let blank = DriverFilters {
            created_at_gte: Some("  ".to_string()),
            created_at_lte: None,
        };
        assert_eq!(blank.parse().unwrap().gte, None);
    }

    #[test]
    fn test_filters_malformed_bound_is_bad_request() {
        let filters = DriverFilters {
            created_at_gte: None,
            created_at_lte: Some("not-a-date".to_string()),
        };
        let err = filters.parse().unwrap_err();
        assert!(err.to_string().contains("created_at_lte"));
    }
}
