#![warn(clippy::all, missing_docs)]

//! Core domain logic for the train timetable manager.
//!
//! This crate hosts the record model, the in-memory store with its
//! sort/filter/persistence operations, the store error type, and the
//! application configuration consumed by the command-line frontend.

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::AppConfig;
pub use error::StoreError;
pub use models::TrainRecord;
pub use store::TrainStore;
