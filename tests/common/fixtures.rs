//! Representative SmartHR payloads.

use serde_json::{Value, json};

pub fn crew(id: &str) -> Value {
    json!({
        "id": id,
        "emp_code": "E00001",
        "last_name": "山田",
        "first_name": "太郎",
        "email": "taro.yamada@example.com",
        "emp_status": "employed",
        "entered_at": "2015-04-01"
    })
}

pub fn crew_listing(total: u64, crews: Vec<Value>) -> Value {
    json!({
        "total": total,
        "page_info": {"page": 1, "per_page": crews.len()},
        "data": crews
    })
}

pub fn department(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "code": null,
        "position": 1,
        "parent": null
    })
}

pub fn dependent_data() -> Value {
    json!({
        "relation_id": "rel-child",
        "last_name": "山田",
        "first_name": "花子",
        "birth_at": "2018-06-01",
        "gender": "female",
        "live_together_type": "living_together"
    })
}

pub fn job_title(id: &str, rank: i64) -> Value {
    json!({"id": id, "name": "Manager", "rank": rank, "code": null})
}
