//! The `smarthr://crew_profiles` resource: a small sample of crews with
//! paging totals.

use crate::error::SmartHrResult;
use crate::mcp_integration::core::SmartHrMcpServer;
use crate::models::CrewListQuery;
use serde_json::{Value, json};

pub const CREW_PROFILES_URI: &str = "smarthr://crew_profiles";

/// Number of crews sampled into the resource.
const SAMPLE_SIZE: u32 = 5;

pub fn crew_profiles_resource() -> Value {
    json!({
        "uri": CREW_PROFILES_URI,
        "name": "crew_profiles",
        "description": "Crew count, paging info and a sample of crew profiles",
        "mimeType": "application/json"
    })
}

pub async fn read_crew_profiles(server: &SmartHrMcpServer) -> SmartHrResult<Value> {
    let query = CrewListQuery {
        per_page: SAMPLE_SIZE,
        ..Default::default()
    };
    let listing = server.client.list_crews(&query).await?.into_value();
    Ok(summarize(&listing))
}

fn summarize(listing: &Value) -> Value {
    let (total, page_info, sample) = match listing {
        Value::Array(crews) => (json!(crews.len()), json!({}), listing.clone()),
        _ => (
            listing.get("total").cloned().unwrap_or_else(|| json!(0)),
            listing.get("page_info").cloned().unwrap_or_else(|| json!({})),
            listing.get("data").cloned().unwrap_or_else(|| json!([])),
        ),
    };

    json!({
        "crew_profiles": {
            "total_crews": total,
            "page_info": page_info,
            "sample_crews": sample
        }
    })
}
