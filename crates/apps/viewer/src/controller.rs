use foundation::math::{Quat, Vec2, Vec3};
use scene::camera::{Camera, ROTATION_SPEED};
use scene::mesh::{Cell, SphereMesh};
use scene::picking::{SurfaceMetrics, pick};

/// Per-frame multiplicative decay of the drag velocity.
const VELOCITY_DECAY: f64 = 0.98;

/// Velocity components below this snap to exactly zero, so spin-down
/// terminates instead of decaying forever.
const VELOCITY_SNAP: f64 = 1e-4;

/// Inertia rotations with an angle at or below this are not applied.
const ANGLE_THRESHOLD: f64 = 1e-4;

/// Pointer-drag state: the single rotation authority while dragging.
///
/// While a drag is active the camera is rotated directly from pointer deltas
/// and the velocity proxy is rewritten from `pixel delta / time delta`; when
/// the drag ends, [`DragController::inertia_step`] takes over as the rotation
/// authority, one of the two per frame, never both.
#[derive(Debug, Clone)]
pub struct DragController {
    dragging: bool,
    last_pointer: Vec2,
    last_timestamp_ms: f64,
    velocity: Vec2,
    highlighted: Option<Cell>,
}

impl Default for DragController {
    fn default() -> Self {
        Self {
            dragging: false,
            last_pointer: Vec2::ZERO,
            last_timestamp_ms: 0.0,
            velocity: Vec2::ZERO,
            highlighted: None,
        }
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn highlighted(&self) -> Option<Cell> {
        self.highlighted
    }

    pub fn pointer_down(&mut self, pos: Vec2, timestamp_ms: f64) {
        self.dragging = true;
        self.last_pointer = pos;
        self.last_timestamp_ms = timestamp_ms;
    }

    /// Drag-move rotates the camera directly; hover-move refreshes the
    /// picked cell.
    pub fn pointer_move(
        &mut self,
        pos: Vec2,
        timestamp_ms: f64,
        camera: &mut Camera,
        mesh: &SphereMesh,
        metrics: &SurfaceMetrics,
    ) {
        if self.dragging {
            let delta = pos - self.last_pointer;
            let dt_ms = (timestamp_ms - self.last_timestamp_ms).max(1e-6);
            camera.rotate(delta.x, delta.y);
            self.velocity = Vec2::new(delta.x / dt_ms, delta.y / dt_ms);
            self.last_pointer = pos;
            self.last_timestamp_ms = timestamp_ms;
        } else {
            self.highlighted = pick(mesh, camera, metrics.to_centered(pos));
        }
    }

    /// End the drag; the last measured velocity is retained for inertia.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.dragging = false;
    }

    pub fn wheel(&mut self, delta: f64, camera: &mut Camera) {
        camera.zoom(delta);
    }

    /// One frame of inertial spin-down. Runs only while not dragging.
    ///
    /// The velocity proxy maps to a rotation axis `(-vy, vx, 0)` and an angle
    /// `|v| * ROTATION_SPEED`; rotations at or below [`ANGLE_THRESHOLD`] are
    /// skipped. The velocity then decays geometrically, with sub-threshold
    /// components snapped to exactly zero.
    pub fn inertia_step(&mut self, camera: &mut Camera) {
        if self.dragging {
            return;
        }

        let angle = self.velocity.length() * ROTATION_SPEED;
        if angle > ANGLE_THRESHOLD {
            let axis = Vec3::new(-self.velocity.y, self.velocity.x, 0.0).normalize();
            let spin = Quat::from_axis_angle(axis, angle);
            camera.orientation = (spin * camera.orientation).normalize();
        }

        self.velocity = self.velocity * VELOCITY_DECAY;
        if self.velocity.x.abs() < VELOCITY_SNAP {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < VELOCITY_SNAP {
            self.velocity.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DragController;
    use foundation::math::{Quat, Vec2};
    use scene::camera::Camera;
    use scene::mesh::SphereMesh;
    use scene::picking::SurfaceMetrics;

    fn scene() -> (SphereMesh, Camera, SurfaceMetrics) {
        (
            SphereMesh::new(150.0, 18, 36),
            Camera::new(),
            SurfaceMetrics::identity(800.0, 600.0),
        )
    }

    #[test]
    fn drag_velocity_is_pixels_per_millisecond() {
        let (mesh, mut camera, metrics) = scene();
        let mut controller = DragController::new();
        controller.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        controller.pointer_move(Vec2::new(200.0, 100.0), 1000.0, &mut camera, &mesh, &metrics);
        assert_eq!(controller.velocity(), Vec2::new(0.1, 0.0));
    }

    #[test]
    fn dragging_rotates_the_camera_directly() {
        let (mesh, mut camera, metrics) = scene();
        let mut controller = DragController::new();
        controller.pointer_down(Vec2::ZERO, 0.0);
        controller.pointer_move(Vec2::new(50.0, -30.0), 16.0, &mut camera, &mesh, &metrics);
        assert_ne!(camera.orientation, Quat::IDENTITY);
    }

    #[test]
    fn hover_move_picks_a_cell_without_rotating() {
        let (mesh, mut camera, metrics) = scene();
        let mut controller = DragController::new();
        controller.pointer_move(Vec2::new(400.0, 300.0), 5.0, &mut camera, &mesh, &metrics);
        assert_eq!(camera.orientation, Quat::IDENTITY);
        assert!(controller.highlighted().is_some());
    }

    #[test]
    fn inertia_applies_rotation_above_the_angle_threshold() {
        let (mesh, mut camera, metrics) = scene();
        let mut controller = DragController::new();
        controller.pointer_down(Vec2::new(0.0, 0.0), 0.0);
        controller.pointer_move(Vec2::new(100.0, 0.0), 1000.0, &mut camera, &mesh, &metrics);
        controller.pointer_up();

        camera.orientation = Quat::IDENTITY;
        controller.inertia_step(&mut camera);
        // Velocity (0.1, 0) maps to axis (0, 1, 0), angle 5e-4.
        assert!(camera.orientation.y > 0.0);
        assert_eq!(camera.orientation.x, 0.0);
        assert_eq!(camera.orientation.z, 0.0);
    }

    #[test]
    fn inertia_skips_rotation_at_or_below_the_threshold() {
        let (_, mut camera, _) = scene();
        let mut controller = DragController::new();
        // |v| = 0.019 gives angle 9.5e-5 < 1e-4: decay only, no rotation.
        controller.velocity = Vec2::new(0.019, 0.0);
        controller.inertia_step(&mut camera);
        assert_eq!(camera.orientation, Quat::IDENTITY);
        assert!(controller.velocity().x < 0.019);
    }

    #[test]
    fn inertia_does_not_run_while_dragging() {
        let (_, mut camera, _) = scene();
        let mut controller = DragController::new();
        controller.pointer_down(Vec2::ZERO, 0.0);
        controller.velocity = Vec2::new(10.0, 10.0);
        controller.inertia_step(&mut camera);
        assert_eq!(camera.orientation, Quat::IDENTITY);
        assert_eq!(controller.velocity(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn spin_down_terminates_at_exactly_zero() {
        let (_, mut camera, _) = scene();
        let mut controller = DragController::new();
        controller.velocity = Vec2::new(0.5, -0.25);

        let mut ticks = 0;
        while controller.velocity() != Vec2::ZERO {
            controller.inertia_step(&mut camera);
            ticks += 1;
            assert!(ticks < 1000, "spin-down must terminate");
        }

        // Once the velocity snaps to zero the orientation stops changing.
        let settled = camera.orientation;
        for _ in 0..10 {
            controller.inertia_step(&mut camera);
        }
        assert_eq!(camera.orientation, settled);
    }

    #[test]
    fn wheel_adjusts_camera_distance() {
        let (_, mut camera, _) = scene();
        let mut controller = DragController::new();
        controller.wheel(20.0, &mut camera);
        assert_eq!(camera.position.z, 7.0);
    }
}
