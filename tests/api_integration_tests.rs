//! HTTP tests of the REST and MCP endpoints.

mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use loan_contracts_server::contract::Branding;
use loan_contracts_server::{build_state, routes, ErrorResponse};

use common::loan_request_json;

macro_rules! app {
    () => {{
        let (api_state, mcp_state) = build_state(Branding::default());
        test::init_service(
            App::new()
                .app_data(api_state)
                .app_data(mcp_state)
                .configure(routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_generate_contract_returns_pdf() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/contracts")
        .set_json(loan_request_json("personal", 20_000.0, 48))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers.get("content-type").unwrap(), "application/pdf");
    assert_eq!(headers.get("x-contract-reference").unwrap(), "ABC12345");
    assert_eq!(headers.get("x-contract-variant").unwrap(), "civil");
    let disposition = headers.get("content-disposition").unwrap().to_str().unwrap();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("contrat-civil-jean-dupont-abc12345.pdf"));

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF-"));
}

#[actix_web::test]
async fn test_generate_contract_rejects_invalid_amount() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/contracts")
        .set_json(loan_request_json("personal", -5.0, 48))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.error, "BadRequest");
    assert!(error.message.contains("contract.amount"));
}

#[actix_web::test]
async fn test_preview_contract() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/contracts/preview")
        .set_json(loan_request_json("business", 35_000.0, 60))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let preview: Value = test::read_body_json(resp).await;
    assert_eq!(preview["variant"], "professional");
    assert_eq!(preview["annexes"], json!(["executive_guarantee"]));
    assert_eq!(preview["reference"], "ABC12345");
    assert_eq!(preview["loan_type_label"], "Prêt professionnel");
    assert!(preview["page_count"].as_u64().unwrap() >= 1);
    assert!(preview["sections"]
        .as_array()
        .unwrap()
        .iter()
        .any(|title| title == "Annexe 1 – Caution personnelle du dirigeant"));
}

#[actix_web::test]
async fn test_preview_contract_rejects_blank_email() {
    let app = app!();
    let mut body = loan_request_json("personal", 20_000.0, 48);
    body["contract"]["email"] = json!("  ");
    let req = test::TestRequest::post()
        .uri("/api/contracts/preview")
        .set_json(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert!(error.message.contains("contract.email"));
}

#[actix_web::test]
async fn test_simulation() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/simulations")
        .set_json(json!({ "amount": 10000.0, "duration": 36 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let simulation: Value = test::read_body_json(resp).await;
    assert_eq!(simulation["formatted"]["monthly_payment"], "293,02 €");
    assert_eq!(simulation["schedule"].as_array().unwrap().len(), 36);
    assert_eq!(simulation["schedule"][35]["remaining_balance"], 0.0);
}

#[actix_web::test]
async fn test_simulation_rejects_zero_duration() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/simulations")
        .set_json(json!({ "amount": 10000.0, "duration": 0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_mcp_tools_list_and_call() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    let tools = resp["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["name"], "generate_loan_contract");

    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {
                "name": "generate_loan_contract",
                "arguments": loan_request_json("consolidation", 25_000.0, 84)
            }
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    let result = &resp["result"];
    assert_eq!(result["isError"], false);
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("consolidation"));
    assert_eq!(result["content"][1]["type"], "resource");
    assert_eq!(result["content"][1]["resource"]["mimeType"], "application/pdf");
}

#[actix_web::test]
async fn test_mcp_notification_is_accepted() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/mcp")
        .set_json(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}
