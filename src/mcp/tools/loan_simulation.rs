//! Tool definition for loan simulation.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "simulate_loan";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Calcule la mensualité, le coût total des intérêts, le montant total dû ",
            "et l'échéancier d'un prêt à taux fixe. Le taux par défaut est celui de la plateforme."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "amount": { "type": "number", "exclusiveMinimum": 0, "description": "Montant en euros" },
            "duration": { "type": "integer", "minimum": 1, "maximum": 360, "description": "Durée en mois" },
            "annual_rate": {
                "type": "number",
                "minimum": 0,
                "exclusiveMaximum": 1,
                "description": "Taux annuel en fraction, par exemple 0.035 (optionnel)"
            }
        },
        "required": ["amount", "duration"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let desc = descriptor();
        assert_eq!(desc.name, TOOL_NAME);
        assert_eq!(desc.input_schema["required"], json!(["amount", "duration"]));
    }
}
