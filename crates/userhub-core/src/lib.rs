//! # userhub-core
//!
//! Core crate for UserHub. Contains configuration schemas, the unified
//! error system, and the trait seams consumed by the service layer.
//!
//! This crate has **no** internal dependencies on other UserHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
