//! # userhub-auth
//!
//! Caller-identity resolution for UserHub: JWT access-token encoding and
//! decoding, and the [`ProfileResolver`] that turns an opaque
//! `Authorization` header value into the caller's stored user record.

pub mod jwt;
pub mod profile;

pub use jwt::{Claims, JwtKeys};
pub use profile::ProfileResolver;
