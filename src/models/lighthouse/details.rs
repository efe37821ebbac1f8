use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Structured payload attached to an audit, keyed by its `type` tag.
///
/// Lighthouse adds detail types without bumping any version we could match
/// on. Anything we do not model, and any known tag whose payload has an
/// unexpected shape, is kept verbatim in [`AuditDetails::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuditDetails {
    Table(TableDetails),
    List(ListDetails),
    Filmstrip(FilmstripDetails),
    Opportunity(OpportunityDetails),
    DebugData(DebugDataDetails),
    Other(UnknownDetails),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableDetails {
    #[serde(default)]
    pub headings: Vec<TableHeading>,
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableHeading {
    #[serde(default)]
    pub key: Option<String>,
    // older reports call it `text`
    #[serde(default, alias = "text")]
    pub label: Option<String>,
    #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDetails {
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilmstripDetails {
    #[serde(default)]
    pub items: Vec<FilmstripFrame>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilmstripFrame {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpportunityDetails {
    #[serde(default)]
    pub headings: Vec<TableHeading>,
    #[serde(default)]
    pub items: Vec<OpportunityItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpportunityItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "totalBytes", default, skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<f64>,
    #[serde(rename = "wastedBytes", default, skip_serializing_if = "Option::is_none")]
    pub wasted_bytes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "debugData", default, skip_serializing_if = "Option::is_none")]
    pub debug_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebugDataDetails {
    #[serde(default)]
    pub items: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDetails {
    pub kind: String,
    pub raw: Value,
}

impl UnknownDetails {
    /// The payload's item list when it has one, else the whole payload.
    pub fn items(&self) -> &Value {
        self.raw.get("items").unwrap_or(&self.raw)
    }
}

impl AuditDetails {
    pub fn from_value(raw: Value) -> Self {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match kind.as_str() {
            "table" => serde_json::from_value(raw.clone()).map(AuditDetails::Table).ok(),
            "list" => serde_json::from_value(raw.clone()).map(AuditDetails::List).ok(),
            "filmstrip" => serde_json::from_value(raw.clone())
                .map(AuditDetails::Filmstrip)
                .ok(),
            "opportunity" => serde_json::from_value(raw.clone())
                .map(AuditDetails::Opportunity)
                .ok(),
            "debugdata" => serde_json::from_value(raw.clone())
                .map(AuditDetails::DebugData)
                .ok(),
            _ => None,
        };

        parsed.unwrap_or(AuditDetails::Other(UnknownDetails { kind, raw }))
    }

    /// The `type` tag as it appeared upstream.
    pub fn kind(&self) -> &str {
        match self {
            AuditDetails::Table(_) => "table",
            AuditDetails::List(_) => "list",
            AuditDetails::Filmstrip(_) => "filmstrip",
            AuditDetails::Opportunity(_) => "opportunity",
            AuditDetails::DebugData(_) => "debugdata",
            AuditDetails::Other(unknown) => &unknown.kind,
        }
    }
}

impl<'de> Deserialize<'de> for AuditDetails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(AuditDetails::from_value(raw))
    }
}

impl Serialize for AuditDetails {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(tag = "type", rename_all = "lowercase")]
        enum Tagged<'a> {
            Table(&'a TableDetails),
            List(&'a ListDetails),
            Filmstrip(&'a FilmstripDetails),
            Opportunity(&'a OpportunityDetails),
            DebugData(&'a DebugDataDetails),
        }

        match self {
            AuditDetails::Table(d) => Tagged::Table(d).serialize(serializer),
            AuditDetails::List(d) => Tagged::List(d).serialize(serializer),
            AuditDetails::Filmstrip(d) => Tagged::Filmstrip(d).serialize(serializer),
            AuditDetails::Opportunity(d) => Tagged::Opportunity(d).serialize(serializer),
            AuditDetails::DebugData(d) => Tagged::DebugData(d).serialize(serializer),
            AuditDetails::Other(unknown) => unknown.raw.serialize(serializer),
        }
    }
}
