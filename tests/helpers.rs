use once_cell::sync::Lazy;
use wiremock::MockServer;

use contact_relay::config::{get_configuration, Configuration};
use contact_relay::startup::AppServer;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
    }
});

pub struct TestApp {
    pub config: Configuration,
    pub addr: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", self.addr))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Stands in for the mail-delivery API; every dispatch lands here.
    let email_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("should load configuration");
    configuration.app.port = 0;
    configuration.email_client.base_url = email_server.uri();
    configuration.email_client.recipient_email = "inbox@relay.test".to_string();
    configuration.email_client.send_timeout_ms = 200;

    let server =
        AppServer::build(configuration.clone()).expect("failed to bind to random port");
    let port = server.port();
    let _ = tokio::spawn(server.run_until_stopped());

    let hostname = configuration.app.host.clone();
    TestApp {
        config: configuration,
        email_server,
        addr: format!("http://{}:{}", hostname, port),
    }
}
