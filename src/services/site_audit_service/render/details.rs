use crate::models::{
    Audit, AuditDetails, AuditStatus, OpportunityItem, TableDetails, UnknownDetails,
};
use serde::Serialize;
use serde_json::Value;

const EMPTY_TABLE_NOTICE: &str = "No specific issues found for this audit.";
const NO_DETAILS_NOTICE: &str = "No additional details available.";

/// One table cell, typed the way Lighthouse tags item values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Cell {
    Link { href: String },
    Image { src: String },
    Code { text: String },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Bullet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Presentation of an audit's `details` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailView {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    Bullets {
        items: Vec<Bullet>,
    },
    Frames {
        sources: Vec<String>,
    },
    Json {
        json: String,
    },
    Unrecognized {
        detail_type: String,
        json: String,
    },
}

/// Expandable panel for a single audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditPanel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: AuditStatus,
    pub status_label: &'static str,
    pub details: Option<DetailView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    pub warnings: Vec<String>,
    pub learn_more: Option<String>,
}

pub fn render_details(details: &AuditDetails) -> DetailView {
    match details {
        AuditDetails::Table(table) => render_table(table),
        AuditDetails::List(list) => DetailView::Bullets {
            items: list
                .items
                .iter()
                .map(|item| Bullet {
                    text: match item.get("text").and_then(Value::as_str) {
                        Some(text) => text.to_string(),
                        None => item.to_string(),
                    },
                    ..Default::default()
                })
                .collect(),
        },
        AuditDetails::Filmstrip(filmstrip) => DetailView::Frames {
            sources: filmstrip
                .items
                .iter()
                .filter_map(|frame| frame.data.clone())
                .collect(),
        },
        AuditDetails::Opportunity(opportunity) => DetailView::Bullets {
            items: opportunity.items.iter().map(opportunity_bullet).collect(),
        },
        AuditDetails::DebugData(debug) => DetailView::Json {
            json: pretty(&debug.items),
        },
        AuditDetails::Other(unknown) => render_unknown(unknown),
    }
}

pub fn render_audit(audit: &Audit) -> AuditPanel {
    let status = audit.status();
    let details = audit.details.as_ref().map(render_details);
    AuditPanel {
        id: audit.id.clone(),
        title: audit.title.clone(),
        description: audit.description.clone(),
        status,
        status_label: status.label(),
        notice: details.is_none().then_some(NO_DETAILS_NOTICE),
        details,
        warnings: audit.warnings().to_vec(),
        learn_more: audit.learn_more().map(str::to_string),
    }
}

fn render_table(table: &TableDetails) -> DetailView {
    let columns = table
        .headings
        .iter()
        .map(|h| h.label.clone().unwrap_or_default())
        .collect();

    let rows = table
        .items
        .iter()
        .map(|item| {
            table
                .headings
                .iter()
                .map(|heading| {
                    let value = heading
                        .key
                        .as_deref()
                        .and_then(|key| item.get(key))
                        .unwrap_or(&Value::Null);
                    table_cell(value)
                })
                .collect()
        })
        .collect::<Vec<Vec<Cell>>>();

    DetailView::Table {
        columns,
        notice: rows.is_empty().then(|| EMPTY_TABLE_NOTICE.to_string()),
        rows,
    }
}

fn table_cell(value: &Value) -> Cell {
    let Value::Object(obj) = value else {
        return Cell::Text {
            text: scalar_text(value),
        };
    };

    let inner = obj.get("value");
    match obj.get("type").and_then(Value::as_str) {
        Some("url") => Cell::Link {
            href: inner.map(scalar_text).unwrap_or_default(),
        },
        Some("thumbnail") => Cell::Image {
            src: inner.map(scalar_text).unwrap_or_default(),
        },
        Some("node") => Cell::Code {
            text: ["snippet", "selector"]
                .iter()
                .filter_map(|k| obj.get(*k).and_then(Value::as_str))
                .find(|s| !s.is_empty())
                .unwrap_or_default()
                .to_string(),
        },
        _ => Cell::Text {
            text: match inner.filter(|v| truthy(v)) {
                Some(v) => v.to_string(),
                None => value.to_string(),
            },
        },
    }
}

fn opportunity_bullet(item: &OpportunityItem) -> Bullet {
    let mut parts = Vec::new();
    if item.url.is_some() {
        if let Some(total) = item.total_bytes.filter(|b| *b != 0.0) {
            parts.push(format!("({} KB)", kib(total)));
        }
        if let Some(wasted) = item.wasted_bytes.filter(|b| *b != 0.0) {
            parts.push(format!("(Potential savings: {} KB)", kib(wasted)));
        }
    }
    if let Some(value) = item.value.as_ref().filter(|v| truthy(v)) {
        parts.push(format!("Value: {}", scalar_text(value)));
    }

    Bullet {
        link: item.url.clone().filter(|u| !u.is_empty()),
        text: parts.join(" "),
        code: item
            .debug_data
            .as_ref()
            .filter(|v| truthy(v))
            .map(pretty),
    }
}

fn render_unknown(unknown: &UnknownDetails) -> DetailView {
    DetailView::Unrecognized {
        detail_type: unknown.kind.clone(),
        json: pretty(unknown.items()),
    }
}

fn kib(bytes: f64) -> String {
    format!("{:.1}", bytes / 1024.0)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
