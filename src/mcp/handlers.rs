//! Stateless MCP HTTP handler: one JSON-RPC request per POST.

use actix_web::{web, HttpResponse, Responder};

use crate::mcp::rpc::RpcRequest;
use crate::mcp::service::McpService;

pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// POST /mcp
pub async fn rpc_handler(
    state: web::Data<McpState>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("Received MCP request: {}", body.method);

    let service = state.service.clone();
    let request = body.into_inner();

    match web::block(move || service.handle_request(request)).await {
        Ok(Some(response)) => HttpResponse::Ok().json(response),
        // Notifications
        Ok(None) => HttpResponse::Accepted().finish(),
        Err(err) => {
            log::error!("MCP worker failed: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));
}
