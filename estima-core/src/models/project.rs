use serde::{Deserialize, Serialize};

use crate::models::ElementCount;

/// Root scope of an estimation. Owns needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

/// A business need inside a project. Owns requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Need {
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Short identifying code.
    pub code: Option<String>,
    /// Optional free-text description.
    pub body: Option<String>,
}

/// A requirement inside a need. Owns per-element-type count rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Optional free-text description, forwarded to the predictor.
    pub body: Option<String>,
    /// Affected-element rows. May be sparse: types with no row count as 0.
    pub elements: Vec<ElementCount>,
}
