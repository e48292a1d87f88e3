use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use proje_frontend::config::AppConfig;
use proje_frontend::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let server_address = config.bind_address.clone();
    let api_base_url = config.api_base_url.clone();

    let state = match AppState::new(config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("Failed to create API client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    info!("Server running at http://{} (API: {})", server_address, api_base_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::routes::configure)
    })
    .bind(server_address)?
    .run()
    .await
}
