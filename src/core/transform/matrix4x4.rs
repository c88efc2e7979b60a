use crate::core::base::*;
use std::ops;

/// Row-major 4x4 matrix acting on column vectors (`p' = M p`), i.e. the
/// same convention as OpenGL once transposed into column-major storage.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [Float; 16],
}

impl Matrix4x4 {
    #[rustfmt::skip]
    pub fn identity() -> Self {
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    #[rustfmt::skip]
    pub fn translate(x: Float, y: Float, z: Float) -> Self {
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, x,
                0.0, 1.0, 0.0, y,
                0.0, 0.0, 1.0, z,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    #[rustfmt::skip]
    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        Matrix4x4 {
            m: [
                x, 0.0, 0.0, 0.0,
                0.0, y, 0.0, 0.0,
                0.0, 0.0, z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the x axis, `theta` in degrees.
    #[rustfmt::skip]
    pub fn rotate_x(theta: Float) -> Self {
        let s = Float::sin(radians(theta));
        let c = Float::cos(radians(theta));
        Matrix4x4 {
            m: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, -s, 0.0,
                0.0, s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the y axis, `theta` in degrees.
    #[rustfmt::skip]
    pub fn rotate_y(theta: Float) -> Self {
        let s = Float::sin(radians(theta));
        let c = Float::cos(radians(theta));
        Matrix4x4 {
            m: [
                c, 0.0, s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                -s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Right-handed world-to-eye transform. The camera sits at `eye`, looks
    /// towards `target` down its local -z axis with `up` as local +y.
    ///
    /// Returns `None` when `eye == target` or `up` is parallel to the view
    /// direction.
    #[rustfmt::skip]
    pub fn look_at(eye: &Point3f, target: &Point3f, up: &Vector3f) -> Option<Self> {
        let dir = *target - *eye;
        if dir.length_squared() == 0.0 || up.length_squared() == 0.0 {
            return None;
        }
        let f = dir.normalize();
        let s = Vector3f::cross(&f, &up.normalize());
        if s.length_squared() == 0.0 {
            return None;
        }
        let s = s.normalize();
        let u = Vector3f::cross(&s, &f);
        let m: [Float; 16] = [
            s.x, s.y, s.z, -s.dot(eye),
            u.x, u.y, u.z, -u.dot(eye),
            -f.x, -f.y, -f.z, f.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        ];
        Some(Matrix4x4 { m })
    }

    /// OpenGL style perspective projection: eye space (-z forward) to clip
    /// space with NDC depth in `[-1, 1]` between `near` and `far`.
    /// `fov_y` is in radians.
    #[rustfmt::skip]
    pub fn perspective(fov_y: Float, aspect: Float, near: Float, far: Float) -> Self {
        let f = 1.0 / Float::tan(fov_y / 2.0);
        let a = (far + near) / (near - far);
        let b = 2.0 * far * near / (near - far);
        Matrix4x4 {
            m: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, a, b,
                0.0, 0.0, -1.0, 0.0,
            ],
        }
    }

    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Matrix4x4 {
            m: [
                m[0], m[4], m[8], m[12],
                m[1], m[5], m[9], m[13],
                m[2], m[6], m[10], m[14],
                m[3], m[7], m[11], m[15],
            ],
        }
    }

    /// Gauss-Jordan elimination with full pivoting.
    pub fn inverse(&self) -> Option<Self> {
        let mut indxc = [0; 4];
        let mut indxr = [0; 4];
        let mut ipiv = [0; 4];
        let mut minv: [Float; 16] = self.m;
        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            for j in 0..4 {
                if ipiv[j] == 1 {
                    continue;
                }
                for k in 0..4 {
                    if ipiv[k] == 0 {
                        if Float::abs(minv[4 * j + k]) >= big {
                            big = Float::abs(minv[4 * j + k]);
                            irow = j;
                            icol = k;
                        }
                    } else if ipiv[k] > 1 {
                        return None;
                    }
                }
            }
            ipiv[icol] += 1;
            if irow != icol {
                for k in 0..4 {
                    minv.swap(4 * irow + k, 4 * icol + k);
                }
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv[4 * icol + icol] == 0.0 {
                return None;
            }

            let pivinv = 1.0 / minv[4 * icol + icol];
            minv[4 * icol + icol] = 1.0;
            for j in 0..4 {
                minv[4 * icol + j] *= pivinv;
            }

            for j in 0..4 {
                if j != icol {
                    let save = minv[4 * j + icol];
                    minv[4 * j + icol] = 0.0;
                    for k in 0..4 {
                        minv[4 * j + k] -= minv[4 * icol + k] * save;
                    }
                }
            }
        }

        for j in [3, 2, 1, 0] {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.swap(4 * k + indxr[j], 4 * k + indxc[j]);
                }
            }
        }

        return Some(Matrix4x4 { m: minv });
    }

    /// `M (x, y, z, w)`, no perspective divide.
    pub fn transform(&self, v: &Vector4f) -> Vector4f {
        let m = &self.m;
        return Vector4f::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        );
    }

    /// Affine point transform followed by a divide when `w != 1`.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let v = self.transform(&Vector4f::from_point(p, 1.0));
        if v.w == 1.0 {
            return v.xyz();
        } else {
            return v.dehomogenize();
        }
    }

    /// Upper-left 3x3 block.
    pub fn linear_part(&self) -> [[Float; 3]; 3] {
        let m = &self.m;
        return [[m[0], m[1], m[2]], [m[4], m[5], m[6]], [m[8], m[9], m[10]]];
    }

    /// Bounds of the eight transformed corners.
    pub fn transform_bounds(&self, bounds: &Bounds3f) -> Bounds3f {
        let first = self.transform_point(&bounds.corner(0));
        return (1..8).fold(Bounds3f::new(&first, &first), |b, i| {
            b.union_p(&self.transform_point(&bounds.corner(i)))
        });
    }
}

fn mul4x4(a: &[Float], b: &[Float; 4]) -> Float {
    return a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];
}

impl ops::Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut m = [0.0; 16];
        for row in 0..4 {
            let lhs = &self.m[4 * row..4 * row + 4];
            for col in 0..4 {
                let column = [rhs.m[col], rhs.m[4 + col], rhs.m[8 + col], rhs.m[12 + col]];
                m[4 * row + col] = mul4x4(lhs, &column);
            }
        }
        Matrix4x4 { m }
    }
}

impl ops::Mul<Vector4f> for Matrix4x4 {
    type Output = Vector4f;
    fn mul(self, rhs: Vector4f) -> Vector4f {
        return self.transform(&rhs);
    }
}

impl From<[Float; 16]> for Matrix4x4 {
    fn from(v: [Float; 16]) -> Self {
        Matrix4x4 { m: v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: &Matrix4x4, b: &Matrix4x4) {
        for i in 0..16 {
            assert!((a.m[i] - b.m[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_001() {
        let m1 = Matrix4x4::scale(4.0, 4.0, 4.0);
        let m2 = m1.inverse().unwrap();
        assert_eq!(m2, Matrix4x4::scale(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_002() {
        let m1 = Matrix4x4::translate(4.0, 4.0, 4.0);
        let m2 = m1.inverse().unwrap();
        assert_eq!(m2, Matrix4x4::translate(-4.0, -4.0, -4.0));
    }

    #[test]
    fn test_003() {
        let m1 = Matrix4x4::rotate_x(90.0);
        assert_near(&m1.inverse().unwrap(), &Matrix4x4::rotate_x(-90.0));
        assert_near(&m1.transpose(), &Matrix4x4::rotate_x(-90.0));
        let m2 = Matrix4x4::rotate_y(30.0);
        assert_near(&(m2 * m2.transpose()), &Matrix4x4::identity());
    }

    #[test]
    fn product_matches_sequential_application() {
        let a = Matrix4x4::translate(1.0, 2.0, 3.0);
        let b = Matrix4x4::rotate_y(90.0);
        let p = Vector4f::new(1.0, 0.0, 0.0, 1.0);
        let lhs = (a * b) * p;
        let rhs = a * (b * p);
        for i in 0..4 {
            assert!((lhs[i] - rhs[i]).abs() < 1e-6);
        }
        // rotate_y(90) takes +x to -z
        assert!((lhs.x - 1.0).abs() < 1e-6);
        assert!((lhs.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_matches_gl_reference() {
        // the origin seen from (10, 10, 10) lies straight ahead at
        // distance sqrt(300)
        let view = Matrix4x4::look_at(
            &Point3f::new(10.0, 10.0, 10.0),
            &Point3f::new(0.0, 0.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        let v = view * Vector4f::new(0.0, 0.0, 0.0, 1.0);
        assert!(v.x.abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
        assert_eq!(v.w, 1.0);
        assert!((v.z + Float::sqrt(300.0)).abs() < 1e-4);
    }

    #[test]
    fn look_at_rejects_degenerate_input() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        assert!(Matrix4x4::look_at(&p, &p, &up).is_none());
        let target = Point3f::new(1.0, 5.0, 3.0);
        assert!(Matrix4x4::look_at(&p, &target, &up).is_none());
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let proj = Matrix4x4::perspective(radians(90.0), 1.0, 1.0, 10.0);
        let near = (proj * Vector4f::new(0.0, 0.0, -1.0, 1.0)).dehomogenize();
        let far = (proj * Vector4f::new(0.0, 0.0, -10.0, 1.0)).dehomogenize();
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
        let edge = (proj * Vector4f::new(2.0, 0.0, -2.0, 1.0)).dehomogenize();
        assert!((edge.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn transform_bounds_covers_rotated_box() {
        let b = Bounds3f::from(((-1.0, -1.0, -1.0), (1.0, 1.0, 1.0)));
        let t = Matrix4x4::translate(0.0, 0.0, -5.0) * Matrix4x4::rotate_y(45.0);
        let tb = t.transform_bounds(&b);
        let r = Float::sqrt(2.0);
        assert!((tb.max.x - r).abs() < 1e-5);
        assert!((tb.min.z - (-5.0 - r)).abs() < 1e-5);
        assert!((tb.max.z - (-5.0 + r)).abs() < 1e-5);
    }
}
