//! Department tool schema definitions

use serde_json::{Value, json};

fn department_properties(with_id: bool) -> Value {
    let mut properties = json!({
        "name": {"type": "string", "description": "Department name; must not contain '/'"},
        "position": {"type": "integer", "description": "Display order"},
        "code": {"type": "string"},
        "parent_id": {"type": "string", "description": "Parent department ID"}
    });
    if with_id {
        properties["department_id"] = json!({"type": "string", "description": "Department ID"});
    }
    properties
}

pub fn create_department_tool() -> Value {
    json!({
        "name": "smarthr_create_department",
        "description": "Create a department",
        "inputSchema": {
            "type": "object",
            "properties": department_properties(false),
            "required": ["name"]
        }
    })
}

pub fn list_departments_tool() -> Value {
    json!({
        "name": "smarthr_list_departments",
        "description": "List departments",
        "inputSchema": {
            "type": "object",
            "properties": {
                "page": {"type": "integer", "minimum": 1, "default": 1},
                "per_page": {"type": "integer", "minimum": 1, "default": 10},
                "code": {"type": "string"},
                "sort": {"type": "string"}
            }
        }
    })
}

pub fn get_department_tool() -> Value {
    json!({
        "name": "smarthr_get_department",
        "description": "Get one department by ID",
        "inputSchema": {
            "type": "object",
            "properties": {"department_id": {"type": "string"}},
            "required": ["department_id"]
        }
    })
}

pub fn update_department_tool() -> Value {
    json!({
        "name": "smarthr_update_department",
        "description": "Replace a department; omitted optional fields are cleared",
        "inputSchema": {
            "type": "object",
            "properties": department_properties(true),
            "required": ["department_id", "name"]
        }
    })
}

pub fn partial_update_department_tool() -> Value {
    json!({
        "name": "smarthr_partial_update_department",
        "description": "Change only the supplied department fields",
        "inputSchema": {
            "type": "object",
            "properties": department_properties(true),
            "required": ["department_id"]
        }
    })
}

pub fn discontinue_department_tool() -> Value {
    json!({
        "name": "smarthr_discontinue_department",
        "description": "Discontinue a department as of a past date (yesterday or earlier)",
        "inputSchema": {
            "type": "object",
            "properties": {
                "department_id": {"type": "string"},
                "discontinued_date": {"type": "string", "format": "date", "description": "YYYY-MM-DD"}
            },
            "required": ["department_id", "discontinued_date"]
        }
    })
}
