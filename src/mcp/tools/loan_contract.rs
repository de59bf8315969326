//! Tool definition for loan contract generation.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "generate_loan_contract";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Génère le contrat de prêt au format PDF pour une demande validée. ",
            "Le modèle (prêt entre particuliers, financement professionnel ou rachat de crédits) ",
            "et les annexes sont choisis automatiquement selon le type de prêt et le montant. ",
            "N'utilisez que les données réelles de la demande : identifiant, prénom, nom, email, ",
            "type de prêt, montant en euros et durée en mois."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "contract": {
                "type": "object",
                "description": "Demande de prêt",
                "properties": {
                    "id": { "type": "string", "description": "Identifiant de la demande" },
                    "first_name": { "type": "string", "description": "Prénom de l'emprunteur" },
                    "last_name": { "type": "string", "description": "Nom de l'emprunteur" },
                    "email": { "type": "string", "description": "Email de l'emprunteur" },
                    "phone": { "type": "string", "description": "Téléphone (optionnel)" },
                    "loan_type": {
                        "type": "string",
                        "description": "personal, auto, home_improvement, business, consolidation, project ou autre"
                    },
                    "amount": { "type": "number", "exclusiveMinimum": 0, "description": "Montant en euros" },
                    "duration": { "type": "integer", "minimum": 1, "maximum": 360, "description": "Durée en mois" },
                    "created_at": { "type": "string", "format": "date-time", "description": "Date de la demande (RFC 3339)" }
                },
                "required": ["id", "first_name", "last_name", "email", "loan_type", "amount", "duration", "created_at"]
            },
            "loan_type_label": {
                "type": "string",
                "description": "Libellé du type de prêt (optionnel, par défaut le libellé de la plateforme)"
            }
        },
        "required": ["contract"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let desc = descriptor();
        assert_eq!(desc.name, TOOL_NAME);
        assert_eq!(desc.input_schema["required"][0], "contract");
        assert!(desc.input_schema["properties"]["contract"]["properties"]
            .get("amount")
            .is_some());
    }
}
