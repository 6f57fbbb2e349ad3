use foundation::math::Vec2;
use foundation::math::precision::stable_total_cmp_f64;

use scene::camera::{Camera, ProjectedVertex};
use scene::mesh::{Cell, SphereMesh};

use crate::color::{CELL_FILL, GRID_FAR, GRID_NEAR, HIGHLIGHT_ALPHA};
use crate::surface::DrawSurface;

/// Project every mesh vertex, keeping the full grid-indexed array.
///
/// Projection never fails, so the result always has one entry per vertex and
/// grid-index lookups stay valid; nothing is filtered or compacted.
pub fn project_vertices(mesh: &SphereMesh, camera: &Camera) -> Vec<ProjectedVertex> {
    mesh.vertices().iter().map(|&v| camera.project(v)).collect()
}

/// Depth-fade alpha for a front-facing cell fill.
///
/// The distance deliberately mixes the screen-space centroid with the
/// view-space average depth, and divides by the camera's z position, exactly
/// as the reference behavior does. Zooming therefore shifts the shading;
/// that coupling is reproduced, not corrected.
pub fn fill_alpha(camera: &Camera, center: Vec2, avg_depth: f64) -> f64 {
    let dx = camera.position.x - center.x;
    let dy = camera.position.y - center.y;
    let dz = camera.position.z - avg_depth;
    let distance = (dx * dx + dy * dy + dz * dz).sqrt();
    (1.0 - distance / camera.position.z).clamp(0.0, 1.0)
}

struct CellFace {
    corners: [ProjectedVertex; 4],
    avg_depth: f64,
}

impl CellFace {
    fn center(&self) -> Vec2 {
        Vec2::new(
            self.corners.iter().map(|p| p.x).sum::<f64>() / 4.0,
            self.corners.iter().map(|p| p.y).sum::<f64>() / 4.0,
        )
    }

    fn screen_corners(&self) -> [Vec2; 4] {
        self.corners.map(|p| Vec2::new(p.x, p.y))
    }

    fn is_front_facing(&self) -> bool {
        self.corners.iter().all(|p| p.depth <= 0.0)
    }
}

fn face_for(cell: Cell, mesh: &SphereMesh, projected: &[ProjectedVertex]) -> CellFace {
    let corners = mesh.cell_corner_indices(cell).map(|index| projected[index]);
    let avg_depth = corners.iter().map(|p| p.depth).sum::<f64>() / 4.0;
    CellFace { corners, avg_depth }
}

/// Compose one frame onto the surface.
///
/// Back-to-front painter's algorithm: cells sorted by descending average
/// depth, each drawn as four grid edges (far or near hemisphere color) plus,
/// when front-facing, a depth-faded translucent fill. The picked cell, if
/// any and still front-facing, is overlaid last at a fixed alpha.
pub fn render_frame(
    mesh: &SphereMesh,
    camera: &Camera,
    highlighted: Option<Cell>,
    surface: &mut dyn DrawSurface,
    surface_size: Vec2,
) {
    surface.clear();
    surface.save();
    surface.translate(surface_size.x / 2.0, surface_size.y / 2.0);

    let projected = project_vertices(mesh, camera);

    let mut faces: Vec<CellFace> = mesh
        .cells()
        .map(|cell| face_for(cell, mesh, &projected))
        .collect();

    // Farthest first; the front hemisphere overdraws the back one.
    faces.sort_by(|a, b| stable_total_cmp_f64(b.avg_depth, a.avg_depth));

    for face in &faces {
        let color = if face.avg_depth > 0.0 {
            GRID_FAR
        } else {
            GRID_NEAR
        };
        let [c1, c2, c3, c4] = face.screen_corners();
        surface.stroke_line(c1, c2, color);
        surface.stroke_line(c2, c3, color);
        surface.stroke_line(c3, c4, color);
        surface.stroke_line(c4, c1, color);

        if face.is_front_facing() {
            let alpha = fill_alpha(camera, face.center(), face.avg_depth);
            surface.fill_quad(face.screen_corners(), CELL_FILL, alpha);
        }
    }

    if let Some(cell) = highlighted {
        let face = face_for(cell, mesh, &projected);
        if face.is_front_facing() {
            surface.fill_quad(face.screen_corners(), CELL_FILL, HIGHLIGHT_ALPHA);
        }
    }

    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::{fill_alpha, project_vertices, render_frame};
    use crate::color::{CELL_FILL, GRID_FAR, GRID_NEAR, HIGHLIGHT_ALPHA};
    use crate::surface::{DrawOp, RecordingSurface};
    use foundation::math::Vec2;
    use scene::camera::Camera;
    use scene::mesh::{Cell, SphereMesh};

    fn viewer_scene() -> (SphereMesh, Camera) {
        (SphereMesh::new(100.0, 4, 8), Camera::new())
    }

    #[test]
    fn projected_array_keeps_every_grid_index() {
        let (mesh, camera) = viewer_scene();
        let projected = project_vertices(&mesh, &camera);
        assert_eq!(projected.len(), mesh.vertices().len());
    }

    #[test]
    fn frame_is_bracketed_by_transform_ops() {
        let (mesh, camera) = viewer_scene();
        let mut surface = RecordingSurface::new();
        render_frame(&mesh, &camera, None, &mut surface, Vec2::new(800.0, 600.0));

        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(surface.ops[1], DrawOp::Save);
        assert_eq!(surface.ops[2], DrawOp::Translate { x: 400.0, y: 300.0 });
        assert_eq!(surface.ops.last(), Some(&DrawOp::Restore));
    }

    #[test]
    fn draws_four_edges_per_cell() {
        let (mesh, camera) = viewer_scene();
        let mut surface = RecordingSurface::new();
        render_frame(&mesh, &camera, None, &mut surface, Vec2::new(800.0, 600.0));
        assert_eq!(surface.lines().count(), 4 * 8 * 4);
    }

    #[test]
    fn paints_far_hemisphere_first() {
        let (mesh, camera) = viewer_scene();
        let mut surface = RecordingSurface::new();
        render_frame(&mesh, &camera, None, &mut surface, Vec2::new(800.0, 600.0));

        let line_colors: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(line_colors[0], GRID_FAR);
        assert_eq!(*line_colors.last().unwrap(), GRID_NEAR);
        // Far-colored edges never reappear after the first near-colored one.
        let first_near = line_colors.iter().position(|c| *c == GRID_NEAR).unwrap();
        assert!(line_colors[first_near..].iter().all(|c| *c == GRID_NEAR));
    }

    #[test]
    fn fills_only_front_facing_cells_with_clamped_alpha() {
        let (mesh, camera) = viewer_scene();
        let mut surface = RecordingSurface::new();
        render_frame(&mesh, &camera, None, &mut surface, Vec2::new(800.0, 600.0));

        let quads: Vec<_> = surface.quads().collect();
        assert!(!quads.is_empty());
        for op in quads {
            let DrawOp::Quad { color, alpha, .. } = op else {
                unreachable!()
            };
            assert_eq!(*color, CELL_FILL);
            assert!((0.0..=1.0).contains(alpha));
        }
    }

    #[test]
    fn fill_alpha_matches_reference_formula() {
        let camera = Camera::new();
        // Centroid at the origin, average depth -5: distance 10, alpha
        // clamps to 0.
        assert_eq!(fill_alpha(&camera, Vec2::ZERO, -5.0), 0.0);
        // Distance 4 against camera z 5.
        let a = fill_alpha(&camera, Vec2::ZERO, 1.0);
        assert!((a - 0.2).abs() < 1e-12);
    }

    #[test]
    fn highlight_overlays_last_at_fixed_alpha() {
        let (mesh, camera) = viewer_scene();
        let picked = scene::picking::pick(&mesh, &camera, Vec2::ZERO).expect("front cell");

        let mut surface = RecordingSurface::new();
        render_frame(
            &mesh,
            &camera,
            Some(picked),
            &mut surface,
            Vec2::new(800.0, 600.0),
        );

        let before_restore = &surface.ops[surface.ops.len() - 2];
        assert!(matches!(
            before_restore,
            DrawOp::Quad { alpha, .. } if *alpha == HIGHLIGHT_ALPHA
        ));
    }

    #[test]
    fn back_facing_highlight_is_skipped() {
        let (mesh, camera) = viewer_scene();
        // Find a cell whose corners all have positive depth.
        let back_cell = mesh
            .cells()
            .find(|&cell| {
                mesh.cell_corner_indices(cell)
                    .iter()
                    .all(|&i| camera.project(mesh.vertices()[i]).depth > 0.0)
            })
            .expect("a back cell");

        let mut with_highlight = RecordingSurface::new();
        render_frame(
            &mesh,
            &camera,
            Some(back_cell),
            &mut with_highlight,
            Vec2::new(800.0, 600.0),
        );
        let mut without = RecordingSurface::new();
        render_frame(&mesh, &camera, None, &mut without, Vec2::new(800.0, 600.0));
        assert_eq!(with_highlight.ops, without.ops);
    }

    #[test]
    fn highlight_cell_identity_is_preserved() {
        let (mesh, camera) = viewer_scene();
        let cell = Cell::new(1, 2);
        let mut surface = RecordingSurface::new();
        render_frame(
            &mesh,
            &camera,
            Some(cell),
            &mut surface,
            Vec2::new(800.0, 600.0),
        );
        // Whether or not the overlay drew, the pass must not panic on any
        // valid cell id, including wrap-adjacent ones.
        render_frame(
            &mesh,
            &camera,
            Some(Cell::new(3, 7)),
            &mut surface,
            Vec2::new(800.0, 600.0),
        );
    }
}
