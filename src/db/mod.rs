pub mod application_repository;
pub mod connection;
pub mod migrations;
pub mod models;
pub mod store;

pub use store::{ApplicationStore, PgApplicationStore};
