use crate::core::base::*;
use std::ops;

/// Rotation quaternion, components stored `(x, y, z, w)` with `w` the real
/// part.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Quaternion {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float,
}

impl Quaternion {
    pub fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Quaternion { x, y, z, w }
    }

    pub fn identity() -> Self {
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    pub fn dot(q1: &Quaternion, q2: &Quaternion) -> Float {
        return (q1.x * q2.x) + (q1.y * q2.y) + (q1.z * q2.z) + (q1.w * q2.w);
    }

    /// Unit quaternion; a zero quaternion normalises to the identity.
    pub fn normalize(&self) -> Self {
        let l = Float::sqrt(Quaternion::dot(self, self));
        if l == 0.0 {
            return Quaternion::identity();
        }
        return *self * (1.0 / l);
    }

    /// Row-major 3x3 rotation matrix of the normalised quaternion, for
    /// column vectors.
    pub fn to_rotation(&self) -> [[Float; 3]; 3] {
        let q = self.normalize();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = x * w;
        let wy = y * w;
        let wz = z * w;

        return [
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ];
    }
}

impl ops::Mul<Float> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Float) -> Quaternion {
        Quaternion::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl From<[Float; 4]> for Quaternion {
    fn from(v: [Float; 4]) -> Self {
        Quaternion::new(v[0], v[1], v[2], v[3])
    }
}
