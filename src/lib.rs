use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod contract;
pub mod mcp;

pub use crate::api::ApiState;
pub use crate::config::AppConfig;

use crate::contract::{Branding, ContractGenerator};
use crate::mcp::tools::ToolRegistry;
use crate::mcp::{McpService, McpState};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generate_contract,
        crate::api::handlers::preview_contract,
        crate::api::handlers::simulate_loan
    ),
    components(
        schemas(
            contract::LoanContractRequest,
            contract::LoanContractInput,
            contract::LoanTerms,
            contract::Installment,
            contract::SimulationRequest,
            contract::LoanSimulation,
            contract::simulation::FormattedTerms,
            api::models::ContractPreview,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Contract Service", description = "Loan contract generation endpoints."),
        (name = "Simulation Service", description = "Loan repayment simulation endpoints.")
    )
)]
pub struct ApiDoc;

/// Shared state for the REST and MCP surfaces, backed by one generator.
pub fn build_state(branding: Branding) -> (web::Data<ApiState>, web::Data<McpState>) {
    let generator = Arc::new(ContractGenerator::new(branding));
    let api_state = ApiState::new(Arc::clone(&generator));
    let mcp_state = McpState::new(McpService::new(ToolRegistry::new(generator)));
    (web::Data::new(api_state), web::Data::new(mcp_state))
}

/// Every application route except metrics and Swagger UI.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(api::config))
        .configure(mcp::config);
}

fn cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![
            header::CONTENT_DISPOSITION.as_str(),
            api::handlers::REFERENCE_HEADER,
            api::handlers::VARIANT_HEADER,
        ])
        .max_age(3600)
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let (api_state, mcp_state) = build_state(config.branding.clone());

    let prometheus = PrometheusMetricsBuilder::new("loan_contracts_server")
        .endpoint("/metrics")
        .build()
        .map_err(|err| anyhow::anyhow!("failed to create Prometheus metrics middleware: {err}"))?;

    log::info!(
        "Starting server at http://{}:{} for {}",
        config.host,
        config.port,
        config.branding.name
    );

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors(&allowed_origins))
            .app_data(api_state.clone())
            .app_data(mcp_state.clone())
            .configure(routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
