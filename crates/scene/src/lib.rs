pub mod camera;
pub mod mesh;
pub mod picking;

pub use camera::*;
pub use mesh::*;
pub use picking::*;
