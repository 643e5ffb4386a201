//! Training program types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A training program, either built-in or user-created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Difficulty label: `"Beginner"`, `"Intermediate"` or `"Advanced"`.
    pub level: String,
    /// Display duration, e.g. `"45 min"`.
    pub duration: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    /// Built-in programs are not persisted and cannot be deleted.
    #[serde(default)]
    pub is_default: bool,
}

impl TrainingProgram {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        level: impl Into<String>,
        duration: impl Into<String>,
        icon_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            level: level.into(),
            duration: duration.into(),
            icon_name,
            is_default: false,
        }
    }
}
