use crate::shared::selection::Selectable;
use serde::{Deserialize, Serialize};

/// Mobile data-collection project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub needs_authentication: bool,
    #[serde(default)]
    pub created_at: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<f64>,
}

impl Selectable for Project {
    type Key = i64;

    fn selection_key(&self) -> i64 {
        self.id
    }
}
