//! The canonical element-type catalog.
//!
//! Estimation quantities are counted against a fixed set of 13 element
//! categories. Both the aggregation engine and the prediction adapter
//! consume this one enum, so the id ↔ label mapping lives in exactly
//! one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 13 canonical element categories.
///
/// Ids are stable and 1-based; they match the catalog used by the
/// backend and by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    Tables = 1,
    TriggersStoredProcs = 2,
    AppInterfaces = 3,
    Forms = 4,
    ComplexSubroutines = 5,
    DbInterfaces = 6,
    Reports = 7,
    Components = 8,
    Scripting = 9,
    ConfigTestComponents = 10,
    MobileDeployment = 11,
    Qa = 12,
    FunctionPoints = 13,
}

impl ElementType {
    /// Every catalog entry, in id order.
    pub const ALL: [ElementType; 13] = [
        ElementType::Tables,
        ElementType::TriggersStoredProcs,
        ElementType::AppInterfaces,
        ElementType::Forms,
        ElementType::ComplexSubroutines,
        ElementType::DbInterfaces,
        ElementType::Reports,
        ElementType::Components,
        ElementType::Scripting,
        ElementType::ConfigTestComponents,
        ElementType::MobileDeployment,
        ElementType::Qa,
        ElementType::FunctionPoints,
    ];

    /// Number of catalog entries.
    pub const COUNT: usize = 13;

    /// Stable 1-based catalog id.
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Zero-based index into a dense per-type array.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Look up a catalog entry by its stable id.
    pub fn from_id(id: u32) -> Option<ElementType> {
        Self::ALL.get(id.checked_sub(1)? as usize).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Tables => "Tables",
            ElementType::TriggersStoredProcs => "Triggers/Stored Procedures",
            ElementType::AppInterfaces => "App Interfaces",
            ElementType::Forms => "Forms",
            ElementType::ComplexSubroutines => "Complex Subroutines",
            ElementType::DbInterfaces => "DB Interfaces",
            ElementType::Reports => "Reports",
            ElementType::Components => "Components",
            ElementType::Scripting => "Scripting",
            ElementType::ConfigTestComponents => "Config/Test Components",
            ElementType::MobileDeployment => "Mobile Deployment",
            ElementType::Qa => "QA",
            ElementType::FunctionPoints => "PF",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
