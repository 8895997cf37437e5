//! Trait seams implemented by leaf crates.

pub mod mailer;

pub use mailer::Mailer;
