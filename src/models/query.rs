//! Query-string models for list and search operations.
//!
//! Optional parameters appear in the query only when supplied with a
//! non-empty value; the remote API treats an empty parameter as a filter.

use crate::models::common::{EmpType, EmploymentStatus, Gender};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Append `key` only when `value` is supplied and non-empty.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value.map(|v| v.to_string()).filter(|v| !v.is_empty()) {
            self.0.push((key.to_string(), value));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Paging shared by every list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub sort: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
        }
    }
}

impl ListParams {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push_opt("sort", self.sort.as_deref());
        query
    }
}

/// Paging and pass-through filters for `GET /v1/crews/{crew_id}/dependents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for DependentListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            extra: BTreeMap::new(),
        }
    }
}

impl From<ListParams> for DependentListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
            sort: params.sort,
            extra: BTreeMap::new(),
        }
    }
}

impl DependentListQuery {
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push_opt("sort", self.sort.as_deref());
        for (key, value) in &self.extra {
            query.push_opt(key, scalar_to_string(value));
        }
        query
    }
}

/// Filters for `GET /v1/crews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub emp_code: Option<String>,
    #[serde(default)]
    pub emp_type: Option<EmpType>,
    #[serde(default)]
    pub employment_type_id: Option<String>,
    #[serde(default)]
    pub emp_status: Option<EmploymentStatus>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub entered_at_from: Option<String>,
    #[serde(default)]
    pub entered_at_to: Option<String>,
    #[serde(default)]
    pub resigned_at_from: Option<String>,
    #[serde(default)]
    pub resigned_at_to: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    /// Any other remote filter, passed through verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for CrewListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            emp_code: None,
            emp_type: None,
            employment_type_id: None,
            emp_status: None,
            gender: None,
            entered_at_from: None,
            entered_at_to: None,
            resigned_at_from: None,
            resigned_at_to: None,
            department_id: None,
            extra: BTreeMap::new(),
        }
    }
}

impl CrewListQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push_opt("emp_code", self.emp_code.as_deref())
            .push_opt("emp_type", self.emp_type)
            .push_opt("employment_type_id", self.employment_type_id.as_deref())
            .push_opt("emp_status", self.emp_status)
            .push_opt("gender", self.gender)
            .push_opt("entered_at_from", self.entered_at_from.as_deref())
            .push_opt("entered_at_to", self.entered_at_to.as_deref())
            .push_opt("resigned_at_from", self.resigned_at_from.as_deref())
            .push_opt("resigned_at_to", self.resigned_at_to.as_deref())
            .push_opt("department_id", self.department_id.as_deref());
        for (key, value) in &self.extra {
            query.push_opt(key, scalar_to_string(value));
        }
        query
    }
}

/// Free-text crew search, sent to `GET /v1/crews` with `q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewSearchQuery {
    #[serde(alias = "query")]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub prefer_business_name: Option<bool>,
}

impl CrewSearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            prefer_business_name: None,
        }
    }

    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("q", &self.q)
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push_opt("prefer_business_name", self.prefer_business_name);
        query
    }
}

/// Filters for `GET /v1/departments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(default)]
    pub code: Option<String>,
}

impl DepartmentListQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("page", self.list.page)
            .push("per_page", self.list.per_page)
            .push_opt("code", self.code.as_deref())
            .push_opt("sort", self.list.sort.as_deref());
        query
    }
}

/// Body of `PUT /v1/crews/{id}/invite`; only supplied ids are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewInviteRequest {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub inviter_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub crew_input_form_id: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
