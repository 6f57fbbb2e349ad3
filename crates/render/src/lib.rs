pub mod color;
pub mod pass;
pub mod surface;

pub use color::*;
pub use pass::*;
pub use surface::*;
