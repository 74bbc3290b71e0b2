// File: services/calbridge_backend/src/lib.rs
//! Router assembly for the calbridge HTTP service.

use axum::Router;
use calbridge_calendly::SharedScheduling;
use calbridge_config::AppConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod service_factory;

/// Prefix every feature router is nested under.
pub const API_PREFIX: &str = "/api";

/// Builds the complete application router.
///
/// The root health check is served at `/`; the Calendly routes live under
/// `/api` and are only mounted when a scheduling service is given.
pub fn build_app(config: &AppConfig, scheduling: Option<SharedScheduling>) -> Router {
    let mut app = Router::new().merge(calbridge_common::routes());

    match scheduling {
        Some(service) if config.use_calendly => {
            app = app.nest(API_PREFIX, calbridge_calendly::routes(service));
        }
        _ => info!("Calendly routes not mounted"),
    }

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use calbridge_calendly::doc::CalendlyApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Calendly Connection Test API",
                version = "1.2.0",
                description = "Thin bridge to the Calendly scheduling API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CalendlyApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}
