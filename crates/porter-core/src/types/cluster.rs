use serde::{Deserialize, Serialize};

/// A Kubernetes cluster linked to a project through a service account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cluster {
    pub id: u64,
    pub name: String,
    pub server: String,
    #[serde(default)]
    pub service_account_id: u64,
}
