pub mod driver_repository;
pub mod vehicle_repository;
