use serde::{Deserialize, Serialize};

/// A deployed Helm release as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub name: String,
    pub info: ChartInfo,
    pub chart: ChartSource,
    /// Raw values config of the release.
    #[serde(default)]
    pub config: String,
    pub version: u64,
    pub namespace: String,
}

/// Release status block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartInfo {
    #[serde(default)]
    pub last_deployed: String,
    #[serde(default)]
    pub deleted: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSource {
    pub metadata: ChartMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartMetadata {
    pub name: String,
    #[serde(default)]
    pub home: String,
    #[serde(default)]
    pub sources: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,
}
