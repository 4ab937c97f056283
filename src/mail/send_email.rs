//! src/mail/send_email.rs

use reqwest::Client;
use secrecy::ExposeSecret;

use crate::config::EmailClientSettings;

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

/// Client for the outbound mail-delivery API.
///
/// The recipient is fixed at construction: every email this service sends
/// goes to the configured operator inbox. The caller only chooses the
/// reply address, subject and body.
pub struct EmailClient {
    http_client: Client,
    email_settings: EmailClientSettings,
}

impl EmailClient {
    pub fn new(email_settings: EmailClientSettings) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(std::time::Duration::from_millis(
                    email_settings.send_timeout_ms,
                ))
                .build()
                .unwrap(),
            email_settings,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.email_settings.recipient_email
    }

    pub async fn send_email(
        &self,
        reply_to: &str,
        subject: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.email_settings.base_url);
        let request_body = SendEmailRequest {
            from: reply_to,
            to: &self.email_settings.recipient_email,
            subject,
            text_body: text_content,
        };

        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.email_settings.authorization.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
