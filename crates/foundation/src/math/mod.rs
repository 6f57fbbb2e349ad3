pub mod precision;
pub mod quat;
pub mod vec;

pub use precision::*;
pub use quat::*;
pub use vec::*;
