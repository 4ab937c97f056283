//! src/domain/contact_submission.rs

/// A validated contact-form submission.
///
/// Presence is the only rule: every field must be non-empty. The email
/// address is passed through verbatim as the reply channel of the outbound
/// mail and is deliberately not checked for syntax.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn parse(name: String, email: String, message: String) -> Result<ContactSubmission, String> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("All fields are required.".to_string());
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}
