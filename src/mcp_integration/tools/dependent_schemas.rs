//! Dependent and relation tool schema definitions

use serde_json::{Value, json};

fn ids(with_dependent: bool) -> Value {
    let mut properties = json!({
        "crew_id": {"type": "string", "description": "Crew (employee) ID"}
    });
    if with_dependent {
        properties["dependent_id"] = json!({"type": "string", "description": "Dependent ID"});
    }
    properties
}

fn dependent_data_property(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "relation_id": {"type": "string", "description": "See smarthr_list_relations"},
            "last_name": {"type": "string"},
            "first_name": {"type": "string"},
            "birth_at": {"type": "string", "format": "date", "description": "YYYY-MM-DD"},
            "gender": {"type": "string", "enum": ["male", "female"]},
            "live_together_type": {
                "type": "string",
                "enum": ["living_together", "living_separately"]
            },
            "is_spouse": {"type": "boolean"},
            "address": {"type": "object"},
            "social_insurance_support_type": {"type": "string"},
            "tax_law_support_type": {"type": "string"}
        },
        "additionalProperties": true
    })
}

fn with_data(mut properties: Value, description: &str) -> Value {
    properties["dependent_data"] = dependent_data_property(description);
    properties
}

pub fn list_dependents_tool() -> Value {
    let mut properties = ids(false);
    properties["page"] = json!({"type": "integer", "minimum": 1, "default": 1});
    properties["per_page"] = json!({"type": "integer", "minimum": 1, "default": 10});
    json!({
        "name": "smarthr_list_dependents",
        "description": "List a crew's dependents (family members); other keys are sent as query filters",
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": ["crew_id"],
            "additionalProperties": true
        }
    })
}

pub fn create_dependent_tool() -> Value {
    json!({
        "name": "smarthr_create_dependent",
        "description": "Register a dependent for a crew; support types default to 'supported'",
        "inputSchema": {
            "type": "object",
            "properties": with_data(ids(false), "Dependent attributes"),
            "required": ["crew_id", "dependent_data"]
        }
    })
}

pub fn get_dependent_tool() -> Value {
    json!({
        "name": "smarthr_get_dependent",
        "description": "Get one dependent of a crew",
        "inputSchema": {
            "type": "object",
            "properties": ids(true),
            "required": ["crew_id", "dependent_id"]
        }
    })
}

pub fn update_dependent_tool() -> Value {
    json!({
        "name": "smarthr_update_dependent",
        "description": "Replace a dependent of a crew",
        "inputSchema": {
            "type": "object",
            "properties": with_data(ids(true), "Full dependent attributes"),
            "required": ["crew_id", "dependent_id", "dependent_data"]
        }
    })
}

pub fn partial_update_dependent_tool() -> Value {
    json!({
        "name": "smarthr_partial_update_dependent",
        "description": "Change a dependent of a crew. last_name, first_name, birth_at, gender, \
                        live_together_type and relation_id must always be supplied.",
        "inputSchema": {
            "type": "object",
            "properties": with_data(ids(true), "Dependent attributes to send"),
            "required": ["crew_id", "dependent_id", "dependent_data"]
        }
    })
}

pub fn delete_dependent_tool() -> Value {
    json!({
        "name": "smarthr_delete_dependent",
        "description": "Delete a dependent of a crew",
        "inputSchema": {
            "type": "object",
            "properties": ids(true),
            "required": ["crew_id", "dependent_id"]
        }
    })
}

pub fn list_relations_tool() -> Value {
    json!({
        "name": "smarthr_list_relations",
        "description": "List dependent relation types (spouse, child, ...)",
        "inputSchema": {
            "type": "object",
            "properties": {
                "page": {"type": "integer", "minimum": 1, "default": 1},
                "per_page": {"type": "integer", "minimum": 1, "default": 100}
            }
        }
    })
}
