mod api;
mod config;
mod database;
mod models;
mod services;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{AppConfig, StorageBackend};
use dotenv::dotenv;
use std::sync::Arc;
use store::{DocumentStore, MemoryStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().expect("Invalid configuration");

    log::info!("🚀 Starting Online Book Shop Service...");

    let store: Arc<dyn DocumentStore> = match config.backend {
        StorageBackend::MongoDB => {
            let uri = config.mongo_uri.as_deref().unwrap_or_default();
            let db = database::MongoDB::connect(uri, &config.database_name)
                .await
                .expect("Invalid MongoDB connection string");

            // A failed ping is only logged; requests will report database errors until it is reachable.
            match db.ping().await {
                Ok(()) => log::info!(
                    "✅ Pinged your deployment. Connected to MongoDB database: {}",
                    config.database_name
                ),
                Err(e) => log::error!("❌ MongoDB ping failed: {}", e),
            }

            Arc::new(db)
        }
        StorageBackend::Memory => {
            log::warn!("⚠️ Using in-memory store, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    let store_data: web::Data<dyn DocumentStore> = web::Data::from(store);

    log::info!(
        "🌐 Online book shop Server is Up & Running on {}",
        config.bind_addr()
    );
    log::info!(
        "📚 Swagger UI available at: http://{}/swagger-ui/",
        config.bind_addr()
    );

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
