//! Verification token generation.

use rand::distr::{Alphanumeric, SampleString};

/// Length of the verification token assigned to every new user.
pub const VERIFICATION_TOKEN_LENGTH: usize = 40;

/// Generates opaque random tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Creates a new token generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random alphanumeric token of the given length.
    pub fn generate(&self, length: usize) -> String {
        Alphanumeric.sample_string(&mut rand::rng(), length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_requested_length() {
        let tokens = TokenGenerator::new();
        assert_eq!(tokens.generate(VERIFICATION_TOKEN_LENGTH).len(), 40);
        assert_eq!(tokens.generate(8).len(), 8);
    }

    #[test]
    fn test_tokens_are_distinct_per_call() {
        let tokens = TokenGenerator::new();
        let a = tokens.generate(VERIFICATION_TOKEN_LENGTH);
        let b = tokens.generate(VERIFICATION_TOKEN_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_alphanumeric() {
        let token = TokenGenerator::new().generate(VERIFICATION_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
