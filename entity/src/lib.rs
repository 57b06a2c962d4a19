//! SeaORM entity definitions for the server registry database.

pub mod prelude;

pub mod server;
