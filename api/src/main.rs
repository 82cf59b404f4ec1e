use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use tm_api::app::create_app;
use tm_api::config::Config;
use tm_api::routes::oauth::AppState;
use tm_core::services::auth::SingleClientValidator;
use tm_core::services::keystore::{KeyMaterialCache, KeyStoreLoader};
use tm_core::services::token::{PublicKeyExporter, TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TokenMint API Server");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Key material is loaded eagerly; a bad container aborts startup instead
    // of surfacing as per-request signing failures.
    let loader = KeyStoreLoader::new(config.keystore.clone());
    let key_cache = match KeyMaterialCache::initialize(loader) {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            error!("Failed to load key material: {e}");
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState {
        token_service: Arc::new(TokenService::new(Arc::clone(&key_cache))),
        public_key_exporter: Arc::new(PublicKeyExporter::new(Arc::clone(&key_cache))),
        credential_validator: Arc::new(SingleClientValidator::new(config.client.clone())),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
