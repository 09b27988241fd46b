#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use actix_web::{middleware::Logger, web, App, HttpServer};
use crumbtrail::{configure_services, CrumbtrailSettings, SessionManager, VERSION};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from Settings.toml and environment variables
    // This also loads the .env file and initializes the logger
    let settings = CrumbtrailSettings::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load settings: {e}")))?;

    start_server(settings).await
}

/// Start the server
///
/// # Errors
///
/// Returns an error if binding the address or running the server fails
async fn start_server(settings: CrumbtrailSettings) -> std::io::Result<()> {
    let bind_address = settings.get_bind_address();
    print_startup_info(&bind_address, &settings);

    let session_manager = web::Data::new(SessionManager::from_settings(&settings));
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .app_data(session_manager.clone())
            .app_data(settings.clone())
            .wrap(Logger::default())
            .configure(configure_services)
    })
    .bind(&bind_address)?
    .run()
    .await
}

fn print_startup_info(bind_address: &str, settings: &CrumbtrailSettings) {
    println!("Starting crumbtrail {VERSION} on http://{bind_address}");
    println!(
        "Session cookie: '{}' (encrypted, secure={})",
        settings.session.cookie_name, settings.cookies.secure
    );
    println!();
    println!("Endpoints:");
    println!("  GET  /sessions/{{key}} - Initialize session defaults and read one key");
    println!("                         (visiting /sessions/count increments the counter)");
    println!("  GET  /crumbs         - Echo request cookies and set mouse=Cookie");
    println!("  GET  /ping           - Health check");
}
