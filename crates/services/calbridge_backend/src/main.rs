// File: services/calbridge_backend/src/main.rs
use calbridge_backend::{build_app, service_factory::create_scheduling_service};
use calbridge_common::logging::{self, log_result};
use calbridge_common::SchedulingService;
use calbridge_config::{ensure_dotenv_loaded, load_config};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // .env may carry RUST_LOG, load it before the subscriber reads the filter
    ensure_dotenv_loaded();
    logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load config: {}", err);
            std::process::exit(1);
        }
    };
    info!("Loaded configuration: {:?}", config);

    let scheduling = match create_scheduling_service(&config) {
        Ok(service) => service,
        Err(err) => {
            error!("Failed to create Calendly client: {}", err);
            std::process::exit(1);
        }
    };

    // A failed check is only logged; the endpoints stay usable and report
    // connection problems per request.
    if let Some(service) = &scheduling {
        let _ = log_result(
            service.verify_connection().await,
            "Calendly connection verified",
            "Calendly connection check failed",
        );
    }

    let app = build_app(&config, scheduling);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        error!("Server error: {}", err);
        std::process::exit(1);
    }
}
