use foundation::math::Vec2;
use render::pass::render_frame;
use render::surface::DrawSurface;
use runtime::frame::Frame;
use runtime::ticker::FrameHandler;
use scene::camera::Camera;
use scene::mesh::{Cell, SphereMesh};
use scene::picking::SurfaceMetrics;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::controller::DragController;

/// The interactive sphere viewer: mesh, camera, drag controller, and the
/// drawing surface, wired into the frame loop.
///
/// Pointer and wheel events arrive on the same logical thread as the frame
/// loop; per frame, `update` (inertia, when not dragging) always precedes
/// `render`.
pub struct SphereApp<S: DrawSurface> {
    mesh: SphereMesh,
    camera: Camera,
    controller: DragController,
    metrics: SurfaceMetrics,
    surface: S,
    surface_size: Vec2,
    last_logged_highlight: Option<Cell>,
}

impl<S: DrawSurface> SphereApp<S> {
    pub fn new(config: &ViewerConfig, surface: S) -> Self {
        let mesh = SphereMesh::new(config.sphere_radius(), config.lat_lines, config.lon_lines);
        let surface_size = Vec2::new(config.surface_width, config.surface_height);
        Self {
            mesh,
            camera: Camera::new(),
            controller: DragController::new(),
            metrics: SurfaceMetrics::identity(config.surface_width, config.surface_height),
            surface,
            surface_size,
            last_logged_highlight: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn highlighted(&self) -> Option<Cell> {
        self.controller.highlighted()
    }

    pub fn pointer_down(&mut self, pos: Vec2, timestamp_ms: f64) {
        self.controller.pointer_down(pos, timestamp_ms);
    }

    pub fn pointer_move(&mut self, pos: Vec2, timestamp_ms: f64) {
        self.controller.pointer_move(
            pos,
            timestamp_ms,
            &mut self.camera,
            &self.mesh,
            &self.metrics,
        );
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    pub fn wheel(&mut self, delta: f64) {
        self.controller.wheel(delta, &mut self.camera);
    }
}

impl<S: DrawSurface> FrameHandler for SphereApp<S> {
    fn update(&mut self, _frame: Frame) {
        // The drag handler owns rotation while dragging; inertia owns it
        // otherwise. inertia_step re-checks the flag itself.
        if !self.controller.is_dragging() {
            self.controller.inertia_step(&mut self.camera);
        }
    }

    fn render(&mut self, frame: Frame) {
        let highlighted = self.controller.highlighted();
        if highlighted != self.last_logged_highlight {
            debug!(frame = frame.index, ?highlighted, "highlight changed");
            self.last_logged_highlight = highlighted;
        }
        render_frame(
            &self.mesh,
            &self.camera,
            highlighted,
            &mut self.surface,
            self.surface_size,
        );
    }
}
