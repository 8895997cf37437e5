//! # userhub-service
//!
//! Business logic service layer for UserHub. Services follow constructor
//! injection — all dependencies are provided at construction time via `Arc`
//! references to the store, mailer, and profile-resolver seams.

pub mod token;
pub mod user;

pub use token::{TokenGenerator, VERIFICATION_TOKEN_LENGTH};
pub use user::AdminUserService;
