//! Telemetry collection from field devices.
//!
//! Each protocol has a collector behind [`TelemetryCollector`]. The shipped
//! collectors return fixed sample readings; real integrations (a LoRaWAN
//! network server, SNMP polling, an MQTT broker) plug in behind the same trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors raised while collecting telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The protocol name is not one of the supported protocols.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Transport a device reports telemetry over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Lorawan,
    Snmp,
    Mqtt,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Lorawan => "lorawan",
            Protocol::Snmp => "snmp",
            Protocol::Mqtt => "mqtt",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = TelemetryError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lorawan" => Ok(Protocol::Lorawan),
            "snmp" => Ok(Protocol::Snmp),
            "mqtt" => Ok(Protocol::Mqtt),
            _ => Err(TelemetryError::UnsupportedProtocol(s.to_lowercase())),
        }
    }
}

/// Source of telemetry readings for one protocol.
pub trait TelemetryCollector: Send + Sync {
    /// Protocol this collector speaks.
    fn protocol(&self) -> Protocol;

    /// Returns the latest reading for `device_id`.
    fn collect(&self, device_id: &str) -> Value;
}

/// LoRaWAN uplink sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct LorawanCollector;

impl TelemetryCollector for LorawanCollector {
    fn protocol(&self) -> Protocol {
        Protocol::Lorawan
    }

    fn collect(&self, device_id: &str) -> Value {
        json!({
            "device_id": device_id,
            "protocol": "lorawan",
            "signal_strength": -120,
            "payload": "example_payload",
        })
    }
}

/// SNMP poll sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnmpCollector;

impl TelemetryCollector for SnmpCollector {
    fn protocol(&self) -> Protocol {
        Protocol::Snmp
    }

    fn collect(&self, device_id: &str) -> Value {
        json!({
            "device_id": device_id,
            "protocol": "snmp",
            "sysUpTime": 123456,
            "ifSpeed": 1000000,
        })
    }
}

/// Last message seen on the device's MQTT topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MqttCollector;

impl MqttCollector {
    pub fn topic_for(device_id: &str) -> String {
        format!("sensors/{device_id}/temperature")
    }
}

impl TelemetryCollector for MqttCollector {
    fn protocol(&self) -> Protocol {
        Protocol::Mqtt
    }

    fn collect(&self, device_id: &str) -> Value {
        json!({
            "device_id": device_id,
            "protocol": "mqtt",
            "topic": Self::topic_for(device_id),
            "value": 22.5,
        })
    }
}

/// Returns the collector registered for `protocol`.
pub fn collector_for(protocol: Protocol) -> &'static dyn TelemetryCollector {
    match protocol {
        Protocol::Lorawan => &LorawanCollector,
        Protocol::Snmp => &SnmpCollector,
        Protocol::Mqtt => &MqttCollector,
    }
}

/// Collects one reading for `device_id` over `protocol`.
pub fn collect_telemetry(device_id: &str, protocol: Protocol) -> Value {
    tracing::debug!(device_id, %protocol, "collecting telemetry");
    collector_for(protocol).collect(device_id)
}

/// Like [`collect_telemetry`], with the protocol given by name.
pub fn collect_telemetry_by_name(device_id: &str, protocol: &str) -> Result<Value, TelemetryError> {
    let protocol = protocol.parse::<Protocol>()?;
    Ok(collect_telemetry(device_id, protocol))
}
