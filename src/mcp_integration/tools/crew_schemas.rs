//! Crew tool schema definitions

use serde_json::{Value, json};

fn crew_id_property() -> Value {
    json!({"type": "string", "description": "Crew (employee) ID"})
}

fn crew_data_property(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "last_name": {"type": "string"},
            "first_name": {"type": "string"},
            "last_name_yomi": {"type": "string"},
            "first_name_yomi": {"type": "string"},
            "email": {"type": "string"},
            "gender": {"type": "string", "enum": ["male", "female"]},
            "birth_at": {"type": "string", "format": "date", "description": "YYYY-MM-DD"},
            "emp_code": {"type": "string"},
            "emp_type": {
                "type": "string",
                "enum": ["board_member", "full_timer", "contract_worker", "permatemp",
                         "part_timer", "outsourcing_contractor", "etc"]
            },
            "emp_status": {"type": "string", "enum": ["employed", "absent", "retired"]},
            "employment_type_id": {"type": "string"},
            "department_ids": {"type": "array", "items": {"type": "string"}},
            "entered_at": {"type": "string", "format": "date", "description": "YYYY-MM-DD"},
            "resigned_at": {"type": "string", "format": "date", "description": "YYYY-MM-DD"},
            "address": {"type": "object", "description": "Postal address block"},
            "custom_fields": {"type": "array", "items": {"type": "object"}},
            "bank_accounts": {"type": "array", "items": {"type": "object"}}
        },
        "additionalProperties": true
    })
}

pub fn create_crew_tool() -> Value {
    json!({
        "name": "smarthr_create_crew",
        "description": "Register a new crew (employee). Only supplied attributes are sent.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "data": crew_data_property("Crew attributes; dates use YYYY-MM-DD")
            },
            "required": ["data"]
        }
    })
}

pub fn get_crew_tool() -> Value {
    json!({
        "name": "smarthr_get_crew",
        "description": "Get one crew (employee) by ID",
        "inputSchema": {
            "type": "object",
            "properties": {
                "crew_id": crew_id_property(),
                "fields": {
                    "type": "string",
                    "description": "Comma-separated attribute names to return"
                }
            },
            "required": ["crew_id"]
        }
    })
}

pub fn update_crew_tool() -> Value {
    json!({
        "name": "smarthr_update_crew",
        "description": "Update a crew (employee). Only supplied attributes are changed.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "crew_id": crew_id_property(),
                "data": crew_data_property("Attributes to change")
            },
            "required": ["crew_id", "data"]
        }
    })
}

pub fn list_crews_tool() -> Value {
    json!({
        "name": "smarthr_list_crews",
        "description": "List crews (employees) with optional filters",
        "inputSchema": {
            "type": "object",
            "properties": {
                "page": {"type": "integer", "minimum": 1, "default": 1},
                "per_page": {"type": "integer", "minimum": 1, "default": 10},
                "emp_code": {"type": "string"},
                "emp_type": {"type": "string"},
                "employment_type_id": {"type": "string"},
                "emp_status": {"type": "string", "enum": ["employed", "absent", "retired"]},
                "gender": {"type": "string", "enum": ["male", "female"]},
                "entered_at_from": {"type": "string", "format": "date"},
                "entered_at_to": {"type": "string", "format": "date"},
                "resigned_at_from": {"type": "string", "format": "date"},
                "resigned_at_to": {"type": "string", "format": "date"},
                "department_id": {"type": "string"}
            },
            "additionalProperties": true
        }
    })
}

pub fn search_crews_tool() -> Value {
    json!({
        "name": "smarthr_search_crews",
        "description": "Free-text search over crews (employees)",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "Search text"},
                "page": {"type": "integer", "minimum": 1, "default": 1},
                "per_page": {"type": "integer", "minimum": 1, "default": 10},
                "prefer_business_name": {"type": "boolean"}
            },
            "required": ["query"]
        }
    })
}

pub fn invite_crew_tool() -> Value {
    json!({
        "name": "smarthr_invite_crew",
        "description": "Invite a crew as a user, using the crew's registered email address",
        "inputSchema": {
            "type": "object",
            "properties": {
                "crew_id": crew_id_property(),
                "inviter_user_id": {"type": "string", "description": "User ID of the inviter"},
                "crew_input_form_id": {"type": "string", "description": "Crew input form ID"}
            },
            "required": ["crew_id"]
        }
    })
}

pub fn delete_crew_tool() -> Value {
    json!({
        "name": "smarthr_delete_crew",
        "description": "Delete a crew (employee) by ID",
        "inputSchema": {
            "type": "object",
            "properties": {"crew_id": crew_id_property()},
            "required": ["crew_id"]
        }
    })
}
