use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use tracing;

use crate::domain::contact_submission::ContactSubmission;
use crate::mail::send_email::EmailClient;
use crate::utils::error_helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),

    // The caller only ever sees the generic message; the source is kept
    // for the operator-facing error chain in the logs.
    #[error("Error sending email")]
    DispatchError(#[source] reqwest::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

#[derive(serde::Deserialize)]
pub struct ContactForm {
    // Absent fields collapse to the empty string so that "missing" and
    // "empty" are rejected through the same path.
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        ContactSubmission::parse(form.name, form.email, form.message)
    }
}

#[tracing::instrument(
name = "Relaying a contact submission",
skip(form, email_client),
fields(
contact_name = % form.name,
contact_email = % form.email,
)
)]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    // fail fast: no dispatch is attempted for an incomplete submission.
    let submission: ContactSubmission = form
        .into_inner()
        .try_into()
        .map_err(ContactError::ValidationError)?;

    dispatch_submission(&email_client, &submission)
        .await
        .map_err(|e| {
            tracing::error!("Failed to relay contact submission: {:?}", e);
            ContactError::DispatchError(e)
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Message sent successfully",
    })))
}

#[tracing::instrument(
    name = "Dispatching a submission as an outbound email",
    skip(email_client, submission)
)]
pub async fn dispatch_submission(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<(), reqwest::Error> {
    let subject = format!("Portfolio Contact from {}", submission.name);

    email_client
        .send_email(&submission.email, &subject, &submission.message)
        .await
}
