use super::Vec3;

/// Unit quaternion representing a rotation.
///
/// Composition via the Hamilton product is non-commutative: `a * b` applies
/// `b` first, then `a`. Callers that accumulate rotations are expected to
/// renormalize afterwards to guard against drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_rad` radians about `axis`.
    ///
    /// `axis` must already be unit length; this constructor does not
    /// normalize it.
    pub fn from_axis_angle(axis: Vec3, angle_rad: f64) -> Self {
        let half = angle_rad / 2.0;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Unit quaternion in the same orientation.
    ///
    /// A zero-magnitude quaternion is absorbed to the identity rotation,
    /// never a division by zero.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Self::IDENTITY;
        }
        Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
            self.w / magnitude,
        )
    }

    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotate `v` by this quaternion as `q * p * q⁻¹`, with `v` lifted to a
    /// pure quaternion. Uses the conjugate for the inverse, so `self` must be
    /// unit length.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let p = Quat::new(v.x, v.y, v.z, 0.0);
        let rotated = self * p * self.conjugate();
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    fn mul(self, q: Self) -> Self::Output {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x,
            self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Quat;
    use crate::math::Vec3;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn normalize_is_fixed_point_on_unit_quaternions() {
        let q = Quat::from_axis_angle(Vec3::UP, 0.7);
        let n = q.normalize();
        assert_close(n.x, q.x, 1e-12);
        assert_close(n.y, q.y, 1e-12);
        assert_close(n.z, q.z, 1e-12);
        assert_close(n.w, q.w, 1e-12);
    }

    #[test]
    fn normalize_zero_quaternion_is_identity() {
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    }

    #[test]
    fn multiply_by_conjugate_is_identity() {
        let q = Quat::from_axis_angle(Vec3::new(0.6, 0.0, 0.8), 1.3);
        let r = q * q.conjugate();
        assert_close(r.w, 1.0, 1e-12);
        assert_close(r.x, 0.0, 1e-12);
        assert_close(r.y, 0.0, 1e-12);
        assert_close(r.z, 0.0, 1e-12);
    }

    #[test]
    fn hamilton_product_is_non_commutative() {
        let a = Quat::from_axis_angle(Vec3::UP, 0.5);
        let b = Quat::from_axis_angle(Vec3::RIGHT, 0.5);
        let ab = a * b;
        let ba = b * a;
        assert!((ab.x - ba.x).abs() > 1e-6 || (ab.z - ba.z).abs() > 1e-6);
    }

    #[test]
    fn rotate_quarter_turn_about_up() {
        let q = Quat::from_axis_angle(Vec3::UP, std::f64::consts::FRAC_PI_2);
        let v = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert_close(v.x, 0.0, 1e-12);
        assert_close(v.y, 0.0, 1e-12);
        assert_close(v.z, -1.0, 1e-12);
    }

    #[test]
    fn identity_rotation_leaves_vectors_unchanged() {
        let v = Vec3::new(0.3, -1.2, 4.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
    }
}
