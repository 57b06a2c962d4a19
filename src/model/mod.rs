//! API data transfer objects.
//!
//! These types define the JSON shapes exchanged over HTTP and the schemas published in
//! the OpenAPI document. They carry no behaviour; conversion to and from the domain
//! models lives in `crate::domain`.

pub mod api;
pub mod server;
