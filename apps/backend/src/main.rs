use actix_web::{web, App, HttpServer};
use rps_backend::config::{ServerConfig, StoreKind};
use rps_backend::infra::state::build_state;
use rps_backend::middleware::cors::cors_middleware;
use rps_backend::middleware::request_trace::RequestTrace;
use rps_backend::middleware::structured_logger::StructuredLogger;
use rps_backend::middleware::trace_span::TraceSpan;
use rps_backend::routes;
use rps_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // BACKEND_HOST, BACKEND_PORT, GAME_STORE, GAME_STATE_FILE, CORS_ALLOWED_ORIGINS
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    match &config.store {
        StoreKind::File(path) => info!(path = %path.display(), "using file state store"),
        StoreKind::Memory => info!("using in-memory state store"),
    }

    let data = web::Data::new(build_state().with_store_kind(&config.store).build());
    let origins = config.cors_origins.clone();

    info!(host = %config.host, port = config.port, "starting game server");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
