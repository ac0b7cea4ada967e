use workshop_registration::app::{
    load_configuration,
    setup_tracing,
    RegistrationApp,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("workshop-registration".into(), "info".into());

    let configuration = load_configuration()?;
    let app = RegistrationApp::build(configuration).await?;
    tracing::info!(port = app.port, "registration backend listening");

    app.server.await?;
    Ok(())
}
