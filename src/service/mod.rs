//! Service layer for business logic.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Business Logic**: Enforcing the rules the store knows nothing about
//! - **Error Mapping**: Turning store failures into tagged domain errors
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services are constructed per request over a borrowed connection pool and hold no
//! state of their own.

pub mod server;
