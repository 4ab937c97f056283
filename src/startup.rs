use std::net::TcpListener;

use actix_web::dev::Server;

use crate::config::Configuration;
use crate::mail::send_email::EmailClient;
use crate::run::run;

pub struct AppServer {
    port: u16,
    server: Server,
}

impl AppServer {
    pub fn build(configuration: Configuration) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))?;

        tracing::info!(
            "Starting contact relay on address: {}",
            listener.local_addr().unwrap()
        );

        let email_client = EmailClient::new(configuration.email_client.clone());

        let port = listener.local_addr().unwrap().port();
        let server = run(listener, email_client, configuration.app.cors_origin)?;

        Ok(Self { port, server })
    }

    /// Port the listener actually bound, needed when the configured port is 0.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
