//! Database repository layer.
//!
//! Repositories perform the database operations (CRUD) for each table. They use SeaORM
//! entity models internally and return domain models, keeping entity types out of the
//! service and controller layers. Store failures are reported as `sea_orm::DbErr`;
//! interpreting them is the service's job.

pub mod server;
