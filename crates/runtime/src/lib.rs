pub mod frame;
pub mod ticker;

pub use frame::*;
pub use ticker::*;
