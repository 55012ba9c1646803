//! Resource graph shapes used by the chart topology view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Kubernetes object belonging to a release.
///
/// `raw_yaml` and `relations` are schema-free on the server side and kept as
/// JSON values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "ID")]
    pub id: u64,
    pub kind: String,
    pub name: String,
    #[serde(rename = "RawYAML", default)]
    pub raw_yaml: Value,
    #[serde(default)]
    pub relations: Value,
}

/// A positioned node in the resource graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: u64,
    pub name: String,
    pub kind: String,
    #[serde(rename = "RawYAML", default, skip_serializing_if = "Option::is_none")]
    pub raw_yaml: Option<Value>,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(rename = "toCursorX", default, skip_serializing_if = "Option::is_none")]
    pub to_cursor_x: Option<f64>,
    #[serde(rename = "toCursorY", default, skip_serializing_if = "Option::is_none")]
    pub to_cursor_y: Option<f64>,
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    #[serde(rename = "type")]
    pub kind: String,
    pub source: u64,
    pub target: u64,
}
