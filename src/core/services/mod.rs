pub mod fixture;
pub mod ids;
pub mod ordering;

pub use fixture::*;
pub use ids::*;
pub use ordering::*;
