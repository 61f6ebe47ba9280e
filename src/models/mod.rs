//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a las tablas `driver` y `vehicle`, junto con los requests validados.

pub mod driver;
pub mod vehicle;
