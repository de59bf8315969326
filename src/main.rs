#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    loan_contracts_server::run().await
}
