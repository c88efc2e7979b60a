use super::primitive::{to_byte, Primitive};
use crate::core::base::*;

/// One 3D Gaussian splat.
///
/// `scale` is stored in log space, the standard deviation along each local
/// axis is `exp(scale)`. `gid` is the 1-based position of the splat in the
/// collection it was built from.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Gaussian3D {
    pub mean: Vector4f,
    pub colour: [Float; 4],
    pub scale: Vector3f,
    pub rot: Quaternion,
    pub gid: Float,
}

impl Gaussian3D {
    pub fn new(position: &Point3f, gid: Float) -> Self {
        Gaussian3D {
            mean: Vector4f::from_point(position, 1.0),
            colour: DEFAULT_POINT_COLOUR,
            scale: Vector3f::new(1.0, 1.0, 1.0),
            rot: Quaternion::identity(),
            gid,
        }
    }

    /// `R S S^T R^T` with `S = diag(exp(scale))`.
    pub fn covariance_3d(&self) -> [[Float; 3]; 3] {
        let r = self.rot.to_rotation();
        let s = [
            Float::exp(self.scale.x),
            Float::exp(self.scale.y),
            Float::exp(self.scale.z),
        ];
        // M = R S
        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = r[i][j] * s[j];
            }
        }
        let mut sigma = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                sigma[i][j] = (0..3).map(|k| m[i][k] * m[j][k]).sum();
            }
        }
        return sigma;
    }
}

impl Primitive for Gaussian3D {
    fn position(&self) -> Point3f {
        self.mean.xyz()
    }

    fn rgb(&self) -> [u8; 3] {
        [
            to_byte(self.colour[0]),
            to_byte(self.colour[1]),
            to_byte(self.colour[2]),
        ]
    }

    fn covariance(&self) -> Option<[[Float; 3]; 3]> {
        Some(self.covariance_3d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let g = Gaussian3D::new(&Point3f::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(g.position(), Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(g.mean.w, 1.0);
        assert_eq!(g.rgb(), [12, 12, 12]);
    }

    #[test]
    fn covariance_of_rotated_anisotropic_splat() {
        let mut g = Gaussian3D::new(&Point3f::zero(), 1.0);
        g.scale = Vector3f::new(Float::ln(2.0), 0.0, 0.0);
        let c = g.covariance_3d();
        assert!((c[0][0] - 4.0).abs() < 1e-5);
        assert!((c[1][1] - 1.0).abs() < 1e-5);

        // quarter turn about z swaps the x and y variances
        let h = radians(90.0) / 2.0;
        g.rot = Quaternion::new(0.0, 0.0, Float::sin(h), Float::cos(h));
        let c = g.covariance_3d();
        assert!((c[0][0] - 1.0).abs() < 1e-5);
        assert!((c[1][1] - 4.0).abs() < 1e-5);
        assert!(c[0][1].abs() < 1e-5);
        assert!((c[2][2] - 1.0).abs() < 1e-5);
    }
}
