use serde::{Deserialize, Serialize};

/// Where a release stores its Helm state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Secret,
    ConfigMap,
    Memory,
}
