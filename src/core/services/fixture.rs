#[cfg(test)]
#[path = "fixture_test.rs"]
mod fixture_test;

use serde::{Deserialize, Serialize};

use crate::core::models::Board;
use crate::core::BoardError;

const INITIAL_DATA: &str = include_str!("../../fixtures/initial_data.json");

/// Read-only seed data the board view loads from at mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitialData {
    pub boards: Vec<Board>,
}

impl InitialData {
    pub fn parse(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The fixture compiled into the binary.
    pub fn bundled() -> Result<Self, BoardError> {
        Self::parse(INITIAL_DATA)
    }

    pub fn find_board(&self, board_id: &str) -> Result<Board, BoardError> {
        self.boards
            .iter()
            .find(|board| board.id == board_id)
            .cloned()
            .ok_or_else(|| BoardError::BoardNotFound(board_id.to_string()))
    }
}

// Load a board from the bundled fixture
pub fn load_board(board_id: &str) -> Result<Board, BoardError> {
    let board = InitialData::bundled()?.find_board(board_id)?;
    log::info!(
        "loaded board {} with {} columns",
        board.id,
        board.columns.len()
    );
    Ok(board)
}
