use foundation::math::Vec2;
use foundation::math::precision::stable_total_cmp_f64;

use crate::camera::Camera;
use crate::mesh::{Cell, SphereMesh};

/// Logical-to-device mapping of the drawing surface, used to bring raw
/// pointer coordinates into the renderer's surface-centered frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceMetrics {
    /// Top-left corner of the surface in pointer (logical) coordinates.
    pub offset: Vec2,
    /// Logical size of the surface.
    pub css_size: Vec2,
    /// Device-pixel size of the surface.
    pub device_size: Vec2,
}

impl SurfaceMetrics {
    /// A surface whose logical and device sizes match, at offset zero.
    pub fn identity(width: f64, height: f64) -> Self {
        Self {
            offset: Vec2::ZERO,
            css_size: Vec2::new(width, height),
            device_size: Vec2::new(width, height),
        }
    }

    /// Convert a pointer position to surface-centered device coordinates
    /// (origin at the surface center, where rendering translates to).
    pub fn to_centered(&self, pointer: Vec2) -> Vec2 {
        let scale_x = self.device_size.x / self.css_size.x;
        let scale_y = self.device_size.y / self.css_size.y;
        let device_x = (pointer.x - self.offset.x) * scale_x;
        let device_y = (pointer.y - self.offset.y) * scale_y;
        Vec2::new(
            device_x - self.device_size.x / 2.0,
            device_y - self.device_size.y / 2.0,
        )
    }
}

/// Nearest front-facing cell to a surface-centered cursor position.
///
/// A cell is a candidate only if all four projected corners have depth <= 0
/// (camera-facing side). Among candidates the screen-space centroid closest
/// to the cursor wins; ties break by row-major iteration order (first found).
/// Returns `None` when no cell qualifies.
pub fn pick(mesh: &SphereMesh, camera: &Camera, cursor: Vec2) -> Option<Cell> {
    let mut closest: Option<(Cell, f64)> = None;

    for cell in mesh.cells() {
        let corners = mesh
            .cell_corner_indices(cell)
            .map(|index| camera.project(mesh.vertices()[index]));

        if corners.iter().any(|p| p.depth > 0.0) {
            continue;
        }

        let center_x = corners.iter().map(|p| p.x).sum::<f64>() / 4.0;
        let center_y = corners.iter().map(|p| p.y).sum::<f64>() / 4.0;
        let distance = (Vec2::new(center_x, center_y) - cursor).length();

        let better = match closest {
            Some((_, best)) => stable_total_cmp_f64(distance, best).is_lt(),
            None => true,
        };
        if better {
            closest = Some((cell, distance));
        }
    }

    closest.map(|(cell, _)| cell)
}
