use std::convert::TryInto;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use anyhow::Context;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    EmailClientSettings,
    Settings,
};
use crate::app::OriginPolicy;
use crate::domain::StudentEmail;
use crate::email_client::EmailClient;
use crate::notifier::Notifier;
use crate::persistence::{
    connection_pool,
    probe_connection,
};
use crate::routes::*;

pub struct RegistrationApp {
    pub server: Server,
    pub port: u16,
    /// Handle on the same pool the handlers use.
    pub db_pool: PgPool,
}

impl RegistrationApp {
    pub async fn build(configuration: Settings) -> Result<RegistrationApp, anyhow::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())
            .with_context(|| {
                format!(
                    "error binding to {}",
                    configuration.application.binding_address()
                )
            })?;
        let port = tcp_listener.local_addr()?.port();

        let db_pool = connection_pool(&configuration.database);
        tokio::spawn(probe_connection(db_pool.clone()));

        let postgres_pool = web::Data::new(db_pool.clone());
        let notifier = web::Data::new(Notifier::new(RegistrationApp::email_client(
            configuration.email_client,
        )?));
        let origin_policy = OriginPolicy::new(&configuration.cors);

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc. The last middleware registered wraps all the others.
            App::new()
                .wrap(origin_policy.middleware())
                .wrap(TracingLogger::default())
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route("/health", web::get().to(health_check))
                .service(
                    web::scope("/api")
                        .route("/register", web::post().to(register))
                        .route("/registrations", web::get().to(list_registrations))
                        .route("/registration", web::get().to(missing_email_parameter))
                        .route("/registration/", web::get().to(missing_email_parameter))
                        .route("/registration/{email}", web::get().to(registration_by_email)),
                )
                // the closure is called once per worker, so every worker gets its own
                // handle on the shared pool and notifier.
                .app_data(postgres_pool.clone())
                .app_data(notifier.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)?
        .run();

        Ok(RegistrationApp {
            server,
            port,
            db_pool,
        })
    }

    fn email_client(client_config: EmailClientSettings) -> Result<EmailClient, anyhow::Error> {
        let base_url = Url::parse(&client_config.base_url).with_context(|| {
            format!(
                "invalid base url: {} for email client",
                client_config.base_url
            )
        })?;

        let sender_email: StudentEmail = client_config
            .sender_email
            .clone()
            .try_into()
            .with_context(|| format!("invalid sender email: {}", client_config.sender_email))?;

        EmailClient::new(
            base_url,
            sender_email,
            client_config.sender_name,
            client_config.username,
            client_config.password,
            client_config.timeout_secs,
        )
    }
}
