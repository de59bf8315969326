//! Tool registry - central routing for MCP tools.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::{
    simulate, ContractError, ContractGenerator, GeneratedContract, LoanContractRequest,
    SimulationRequest,
};
use crate::mcp::content::{ContentItem, ToolResult};

use super::loan_contract;
use super::loan_simulation;

/// Tool descriptor as listed by `tools/list`.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub struct ToolRegistry {
    generator: Arc<ContractGenerator>,
}

impl ToolRegistry {
    pub fn new(generator: Arc<ContractGenerator>) -> Self {
        Self { generator }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![loan_contract::descriptor(), loan_simulation::descriptor()]
    }

    pub fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match name {
            loan_contract::TOOL_NAME => self.call_loan_contract(arguments),
            loan_simulation::TOOL_NAME => self.call_loan_simulation(arguments),
            _ => ToolResult::error(format!(
                "Outil '{}' indisponible. Outils disponibles : {}, {}",
                name,
                loan_contract::TOOL_NAME,
                loan_simulation::TOOL_NAME
            )),
        }
    }

    fn call_loan_contract(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<LoanContractRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        match self.generator.generate(request) {
            Ok(contract) => contract_result(contract),
            Err(ContractError::InvalidInput(message)) => ToolResult::error(message),
            Err(err) => {
                log::error!("MCP contract generation failed: {}", err);
                ToolResult::error(format!("Échec de la génération du contrat : {}", err))
            }
        }
    }

    fn call_loan_simulation(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<SimulationRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        match simulate(&request) {
            Ok(simulation) => {
                let summary = format!(
                    "Mensualité : {}\nCoût total des intérêts : {}\nMontant total dû : {}",
                    simulation.formatted.monthly_payment,
                    simulation.formatted.total_interest,
                    simulation.formatted.total_repayment
                );
                let json_text =
                    serde_json::to_string_pretty(&simulation).unwrap_or_else(|_| "{}".to_string());
                ToolResult::success(vec![ContentItem::text(summary), ContentItem::text(json_text)])
            }
            Err(message) => ToolResult::error(message),
        }
    }
}

fn contract_result(contract: GeneratedContract) -> ToolResult {
    let text = format!(
        "Contrat {} généré.\nModèle : {}\nFichier : {}\nPages : {}",
        contract.reference,
        contract.meta.variant.name(),
        contract.filename,
        contract.layout.page_count()
    );

    ToolResult::success(vec![
        ContentItem::text(text),
        ContentItem::resource(&contract.pdf, contract.mime_type, contract.reference_url),
    ])
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Arguments invalides : {}", err))
}
