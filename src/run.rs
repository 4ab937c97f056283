use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::mail::send_email::EmailClient;
use crate::routes::contact::submit_contact;
use crate::routes::health::health_check;

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    cors_origin: String,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    Ok(HttpServer::new(move || {
        // Only the deployed front-end may call the relay with credentials;
        // every other origin is rejected at this boundary.
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        // A payload the extractor cannot deserialize (null or non-string
        // fields, malformed JSON) is still an incomplete submission: answer
        // with the same error body as the presence check.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(serde_json::json!({
                "error": "All fields are required.",
            }));
            InternalError::from_response(err, response).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact))
            .app_data(json_config)
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run())
}
