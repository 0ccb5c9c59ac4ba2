pub mod board_operations;
pub mod column_operations;
pub mod drag_drop;

pub use board_operations::*;
pub use column_operations::*;
pub use drag_drop::*;
