use contact_relay::config::get_configuration;
use contact_relay::startup::AppServer;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_subscriber(get_subscriber(
        "contact-relay".into(),
        "info".into(),
        std::io::stdout,
    ));

    let configuration = get_configuration().expect("Should have loaded configuration");
    let server = AppServer::build(configuration).expect("should have created server");

    server.run_until_stopped().await?;

    Ok(())
}
