//! Request and response bodies for the AI-Core API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Network equipment vendor of a device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Cisco,
    Juniper,
    Mikrotik,
    Aruba,
    Generic,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Cisco => "cisco",
            Vendor::Juniper => "juniper",
            Vendor::Mikrotik => "mikrotik",
            Vendor::Aruba => "aruba",
            Vendor::Generic => "generic",
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

// -- Config parsing --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseConfigReq {
    pub device_id: String,
    pub vendor: Vendor,
    pub raw: String,
}

/// Vendor-neutral view of a device configuration. Every section is free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedConfig {
    #[serde(default = "empty_object")]
    pub interfaces: Value,
    #[serde(default = "empty_object")]
    pub vlans: Value,
    #[serde(default = "empty_object")]
    pub routing: Value,
    #[serde(default = "empty_object")]
    pub acls: Value,
    #[serde(default = "empty_object")]
    pub meta: Value,
}

impl Default for NormalizedConfig {
    fn default() -> Self {
        Self {
            interfaces: empty_object(),
            vlans: empty_object(),
            routing: empty_object(),
            acls: empty_object(),
            meta: empty_object(),
        }
    }
}

/// Parser confidence, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseConfigRes {
    pub normalized: NormalizedConfig,
    pub confidence: Confidence,
    pub warnings: Vec<String>,
}

// -- Setup explanation --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainReq {
    pub site_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainRes {
    pub markdown: String,
    pub highlights: Vec<HashMap<String, String>>,
}

// -- Diagrams --

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    #[default]
    Drawio,
    Mermaid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramReq {
    pub site_id: String,
    #[serde(default)]
    pub format: DiagramFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagramRes {
    pub format: DiagramFormat,
    pub data: String,
}

// -- Change planning --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanChangesReq {
    pub site_id: String,
    pub intent: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanChangesRes {
    pub diff: Vec<Value>,
    pub dry_run: Value,
    pub blast_radius: Vec<String>,
}

// -- Validation --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateReq {
    pub site_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateRes {
    pub ok: bool,
    pub errors: Vec<String>,
    pub metrics: HashMap<String, f64>,
}

// -- Telemetry --

/// `protocol` is matched case-insensitively against [`Protocol`](crate::telemetry::Protocol).
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryReq {
    pub device_id: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TelemetryRes {
    pub timestamp: DateTime<Utc>,
    pub data: Value,
}
