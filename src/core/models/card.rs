use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub board_id: String,
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
}

impl Card {
    pub fn new(id: String, board_id: String, column_id: String, title: String) -> Self {
        Self {
            id,
            board_id,
            column_id,
            title,
            cover: None,
        }
    }
}
