pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod materials;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;
pub mod upload;
pub mod validation;

pub use error::{AppError, StoreError};
pub use store::CourseStore;
