//! User domain entities.

pub mod model;

pub use model::{CreateUser, NewUser, UpdateUser, User};
