use serde::{Deserialize, Serialize};

/// A source repository available for deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repo {
    #[serde(rename = "FullName")]
    pub full_name: String,
    pub kind: String,
}

/// A file or directory entry inside a repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }
}
