//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and request payload shapes
//! - `schema.rs`: SQL DDL for initializing the database (PostgreSQL)
//! - `postgres.rs`: the pooled storage wrapper with one method per operation

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::{Assignment, Medication, ScheduleField, User};
pub use postgres::MedialertStorage;
pub use schema::POSTGRES_INIT;
