//! # userhub-api
//!
//! HTTP API layer for UserHub built on Axum.
//!
//! Provides the administrative REST endpoints, DTOs, the `Authorization`
//! header extractor, and the mapping from domain error kinds to HTTP
//! responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
