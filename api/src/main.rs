use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;

use sms_api::middleware::cors;
use sms_api::routes;
use sms_api::state::AppState;
use sms_infra::database::{create_pool, MySqlMessageRepository};
use sms_infra::queue::RedisQueue;
use sms_infra::InfrastructureConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting SMS API server");

    let config = InfrastructureConfig::from_env().expect("configuration must be valid");

    let pool = create_pool(&config.database)
        .await
        .expect("MySQL must be reachable");
    let repository = Arc::new(MySqlMessageRepository::new(pool));

    let queue = Arc::new(
        RedisQueue::connect(&config.queue)
            .await
            .expect("Redis must be reachable"),
    );

    let state = web::Data::new(AppState::new(repository, queue));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors::create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .service(routes::sms::scope::<MySqlMessageRepository, RedisQueue>())
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sms-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
