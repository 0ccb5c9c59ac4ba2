use serde::{Deserialize, Serialize};

use super::Column;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub column_order: Vec<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Rebuilds `column_order` from the current `columns` sequence.
    pub fn sync_column_order(&mut self) {
        self.column_order = self.columns.iter().map(|column| column.id.clone()).collect();
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }
}
