use std::sync::Arc;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};

use crate::api::models::ContractPreview;
use crate::contract::{
    simulate, ContractError, ContractGenerator, LoanContractRequest, LoanSimulation,
    SimulationRequest,
};
use crate::ErrorResponse;

pub const REFERENCE_HEADER: &str = "X-Contract-Reference";
pub const VARIANT_HEADER: &str = "X-Contract-Variant";

/// Shared state of the contract endpoints.
pub struct ApiState {
    pub generator: Arc<ContractGenerator>,
}

impl ApiState {
    pub fn new(generator: Arc<ContractGenerator>) -> Self {
        Self { generator }
    }
}

fn contract_error_response(err: ContractError) -> HttpResponse {
    match err {
        ContractError::InvalidInput(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message))
        }
        other => {
            log::error!("Contract rendering failed: {}", other);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&other.to_string()))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Contract Service",
    post,
    path = "/contracts",
    request_body = LoanContractRequest,
    responses(
        (status = 200, description = "Contract generated", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Invalid loan request", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_contract(
    data: web::Data<ApiState>,
    req: web::Json<LoanContractRequest>,
) -> impl Responder {
    let generator = Arc::clone(&data.generator);
    let request = req.into_inner();

    let contract = match web::block(move || generator.generate(request)).await {
        Ok(Ok(contract)) => contract,
        Ok(Err(err)) => return contract_error_response(err),
        Err(err) => {
            log::error!("Contract generation worker failed: {}", err);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Contract generation was interrupted"));
        }
    };

    HttpResponse::Ok()
        .content_type(contract.mime_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(contract.filename.clone())],
        })
        .insert_header((REFERENCE_HEADER, contract.reference.clone()))
        .insert_header((VARIANT_HEADER, contract.meta.variant.name()))
        .body(contract.pdf)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Contract Service",
    post,
    path = "/contracts/preview",
    request_body = LoanContractRequest,
    responses(
        (status = 200, description = "Contract layout summary", body = ContractPreview),
        (status = 400, description = "Invalid loan request", body = ErrorResponse)
    )
)]
pub async fn preview_contract(
    data: web::Data<ApiState>,
    req: web::Json<LoanContractRequest>,
) -> impl Responder {
    let generator = Arc::clone(&data.generator);
    let request = req.into_inner();

    match web::block(move || generator.compose(&request)).await {
        Ok(Ok(composed)) => HttpResponse::Ok().json(ContractPreview::from(&composed)),
        Ok(Err(err)) => contract_error_response(err),
        Err(err) => {
            log::error!("Contract preview worker failed: {}", err);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Contract preview was interrupted"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Simulation Service",
    post,
    path = "/simulations",
    request_body = SimulationRequest,
    responses(
        (status = 200, description = "Repayment figures and schedule", body = LoanSimulation),
        (status = 400, description = "Invalid simulation request", body = ErrorResponse)
    )
)]
pub async fn simulate_loan(req: web::Json<SimulationRequest>) -> impl Responder {
    match simulate(&req) {
        Ok(simulation) => HttpResponse::Ok().json(simulation),
        Err(message) => HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message)),
    }
}
