//! Tool schema definitions for the lookup resources
//!
//! Employment types, job titles, grades and job categories expose the same six
//! tools; [`LookupKind`] carries what differs between them.

use serde_json::{Map, Value, json};

/// One lookup resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    EmploymentType,
    JobTitle,
    Grade,
    JobCategory,
}

impl LookupKind {
    pub const ALL: [LookupKind; 4] = [
        Self::EmploymentType,
        Self::JobTitle,
        Self::Grade,
        Self::JobCategory,
    ];

    pub fn singular(self) -> &'static str {
        match self {
            Self::EmploymentType => "employment_type",
            Self::JobTitle => "job_title",
            Self::Grade => "grade",
            Self::JobCategory => "job_category",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::EmploymentType => "employment_types",
            Self::JobTitle => "job_titles",
            Self::Grade => "grades",
            Self::JobCategory => "job_categories",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::EmploymentType => "employment type",
            Self::JobTitle => "job title",
            Self::Grade => "grade",
            Self::JobCategory => "job category",
        }
    }

    /// Argument carrying the record ID, e.g. `job_title_id`.
    pub fn id_param(self) -> String {
        format!("{}_id", self.singular())
    }

    fn has_rank(self) -> bool {
        matches!(self, Self::JobTitle | Self::Grade)
    }

    /// Body fields accepted by `action`.
    fn fields(self, action: LookupAction) -> &'static [&'static str] {
        match (self, action) {
            (_, LookupAction::List | LookupAction::Get | LookupAction::Delete) => &[],
            (Self::EmploymentType, LookupAction::Update) => &["name"],
            (Self::EmploymentType, _) => &["name", "code"],
            (Self::JobTitle, LookupAction::Update) => &["name", "rank"],
            (Self::JobTitle, _) => &["name", "rank", "code"],
            (Self::Grade, _) => &["name", "rank"],
            (Self::JobCategory, _) => &["name"],
        }
    }

    fn required_on_create(self) -> Vec<&'static str> {
        if self.has_rank() { vec!["name", "rank"] } else { vec!["name"] }
    }

    /// Resolve the kind and action from a `smarthr_<action>_<resource>` tool name.
    pub fn parse_tool(name: &str) -> Option<(Self, LookupAction)> {
        let rest = name.strip_prefix("smarthr_")?;
        Self::ALL.into_iter().find_map(|kind| {
            LookupAction::ALL.into_iter().find_map(|action| {
                (rest == action.tool_suffix(kind)).then_some((kind, action))
            })
        })
    }
}

/// The six operations every lookup resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupAction {
    List,
    Create,
    Get,
    Update,
    PartialUpdate,
    Delete,
}

impl LookupAction {
    pub const ALL: [LookupAction; 6] = [
        Self::List,
        Self::Create,
        Self::Get,
        Self::Update,
        Self::PartialUpdate,
        Self::Delete,
    ];

    fn tool_suffix(self, kind: LookupKind) -> String {
        match self {
            Self::List => format!("list_{}", kind.plural()),
            Self::Create => format!("create_{}", kind.singular()),
            Self::Get => format!("get_{}", kind.singular()),
            Self::Update => format!("update_{}", kind.singular()),
            Self::PartialUpdate => format!("partial_update_{}", kind.singular()),
            Self::Delete => format!("delete_{}", kind.singular()),
        }
    }

    pub fn tool_name(self, kind: LookupKind) -> String {
        format!("smarthr_{}", self.tool_suffix(kind))
    }
}

fn field_schema(kind: LookupKind, field: &str) -> Value {
    match field {
        "rank" => json!({
            "type": "integer",
            "minimum": 1,
            "maximum": 99999,
            "description": format!("{} rank, 1 to 99999", kind.label())
        }),
        "code" => json!({"type": "string", "description": format!("{} code", kind.label())}),
        _ => json!({"type": "string", "description": format!("{} name", kind.label())}),
    }
}

fn properties(kind: LookupKind, fields: &[&str], with_id: bool) -> Map<String, Value> {
    let mut props = Map::new();
    if with_id {
        props.insert(kind.id_param(), json!({"type": "string"}));
    }
    for field in fields {
        props.insert(field.to_string(), field_schema(kind, field));
    }
    props
}

/// Schema for one lookup tool.
pub fn lookup_tool(kind: LookupKind, action: LookupAction) -> Value {
    let fields = kind.fields(action);
    let id = kind.id_param();
    let label = kind.label();

    let (description, props, required): (String, Map<String, Value>, Vec<String>) = match action {
        LookupAction::List => {
            let mut props = Map::new();
            props.insert("page".into(), json!({"type": "integer", "minimum": 1, "default": 1}));
            props.insert("per_page".into(), json!({"type": "integer", "minimum": 1, "default": 10}));
            if kind != LookupKind::EmploymentType {
                props.insert("sort".into(), json!({"type": "string"}));
            }
            (format!("List {}", kind.plural().replace('_', " ")), props, vec![])
        }
        LookupAction::Create => (
            format!("Create a {label}"),
            properties(kind, fields, false),
            kind.required_on_create().into_iter().map(String::from).collect(),
        ),
        LookupAction::Get => (
            format!("Get one {label} by ID"),
            properties(kind, fields, true),
            vec![id],
        ),
        LookupAction::Update => {
            let mut required = vec![id];
            required.extend(kind.required_on_create().into_iter().map(String::from));
            (
                format!("Replace a {label}"),
                properties(kind, fields, true),
                required,
            )
        }
        LookupAction::PartialUpdate => (
            format!("Change only the supplied {label} fields"),
            properties(kind, fields, true),
            vec![id],
        ),
        LookupAction::Delete => (
            format!("Delete a {label} by ID"),
            properties(kind, fields, true),
            vec![id],
        ),
    };

    json!({
        "name": action.tool_name(kind),
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": props,
            "required": required
        }
    })
}

/// Every lookup tool, grouped by resource.
pub fn lookup_tools() -> Vec<Value> {
    LookupKind::ALL
        .into_iter()
        .flat_map(|kind| LookupAction::ALL.into_iter().map(move |action| lookup_tool(kind, action)))
        .collect()
}
