//! DTOs de la API
//!
//! Forma JSON de los requests de listado y de las respuestas.

pub mod common;
pub mod driver_dto;
pub mod vehicle_dto;
