use foundation::math::{Quat, Vec3};

/// Drag-to-orbit rotation speed (radians per pixel).
pub const ROTATION_SPEED: f64 = 0.005;

/// Wheel-delta to camera-distance factor.
pub const ZOOM_SPEED: f64 = 0.1;

/// A mesh vertex after projection: screen-space position plus the retained
/// view-space z. `depth` is the rotated, camera-relative z before the
/// perspective divide; it drives front/back and sort decisions and is never
/// displayed. Negative depth means toward the viewer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedVertex {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Perspective camera with a quaternion orientation.
///
/// The orientation is the single piece of mutable rotation state in the
/// viewer; it is driven either by direct drag deltas or by the inertia step,
/// never both within one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Quat,
    pub projection_scale: f64,
    /// Offset added to the perspective denominator so vertices near the
    /// camera plane cannot divide by zero.
    pub fixed_distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            orientation: Quat::IDENTITY,
            projection_scale: 1000.0,
            fixed_distance: 5.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one drag delta: yaw about world-up by `-delta_x`, pitch about
    /// local-right by `delta_y`, both scaled by [`ROTATION_SPEED`].
    ///
    /// The composition order `yaw * orientation * pitch` is intentionally
    /// asymmetric (yaw in the world frame, pitch in the object frame) and
    /// produces the drag-to-orbit feel; keep it exactly.
    pub fn rotate(&mut self, delta_x: f64, delta_y: f64) {
        let yaw = Quat::from_axis_angle(Vec3::UP, -delta_x * ROTATION_SPEED);
        let pitch = Quat::from_axis_angle(Vec3::RIGHT, delta_y * ROTATION_SPEED);
        self.orientation = (yaw * self.orientation * pitch).normalize();
    }

    /// Project a world-space vertex to screen space.
    ///
    /// Never fails and never culls; callers filter by the sign of the
    /// returned depth as needed.
    pub fn project(&self, vertex: Vec3) -> ProjectedVertex {
        let rotated = self.orientation.rotate(vertex - self.position);
        let scale =
            self.projection_scale / (self.projection_scale + rotated.z + self.fixed_distance);
        ProjectedVertex {
            x: rotated.x * scale,
            y: rotated.y * scale,
            depth: rotated.z,
        }
    }

    /// Move the camera along z by a wheel delta, scaled by [`ZOOM_SPEED`].
    pub fn zoom(&mut self, wheel_delta: f64) {
        self.position.z += wheel_delta * ZOOM_SPEED;
    }
}
