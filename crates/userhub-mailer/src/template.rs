//! Confirmation mail rendering.

/// Subject line of the new-user confirmation mail.
pub fn new_user_subject() -> String {
    "Confirm your UserHub account".to_string()
}

/// Plain-text body of the new-user confirmation mail.
///
/// The confirmation link is `{base}?token={verification_token}`.
pub fn new_user_body(name: &str, verification_token: &str, confirmation_url_base: &str) -> String {
    format!(
        "Hello {name},\n\n\
         An administrator created an account for you. Please confirm your \
         email address by opening the link below:\n\n\
         {confirmation_url_base}?token={verification_token}\n\n\
         If you did not expect this mail, you can ignore it.\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_contains_name_and_token() {
        let body = new_user_body("Ann", "tok123", "https://app.example/confirm");
        assert!(body.contains("Hello Ann,"));
        assert!(body.contains("https://app.example/confirm?token=tok123"));
    }
}
