pub mod board_content;
pub mod card;
pub mod column;
pub mod confirm_modal;
pub mod header;

pub use board_content::BoardContent;
pub use card::BoardCard;
pub use column::BoardColumn;
pub use confirm_modal::ConfirmModal;
pub use header::BoardBar;
