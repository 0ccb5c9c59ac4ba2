use serde::{Deserialize, Serialize};

use super::Card;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub board_id: String,
    pub title: String,
    #[serde(default)]
    pub card_order: Vec<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    // Only ever set on a column travelling up as a removal request.
    #[serde(rename = "_destroy", default, skip_serializing_if = "std::ops::Not::not")]
    pub destroy: bool,
}

impl Column {
    pub fn new(id: String, board_id: String, title: String) -> Self {
        Self {
            id,
            board_id,
            title,
            card_order: Vec::new(),
            cards: Vec::new(),
            destroy: false,
        }
    }

    /// Rebuilds `card_order` from the current `cards` sequence.
    pub fn sync_card_order(&mut self) {
        self.card_order = self.cards.iter().map(|card| card.id.clone()).collect();
    }
}
