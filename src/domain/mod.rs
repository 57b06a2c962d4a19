//! Domain models and operation-specific parameter types.
//!
//! Domain models are what services and controllers work with. They are converted from
//! SeaORM entity models at the data layer boundary so entity types never leak upward,
//! and converted into DTOs at the controller boundary.

pub mod server;
