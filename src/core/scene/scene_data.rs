use super::gaussian::Gaussian3D;
use super::point::ScenePoint;
use super::primitive::Primitive;
use crate::core::base::*;

use log::*;

/// Loader output: positions plus optional per-point attribute arrays. Every
/// attribute array present must have one entry per position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneData {
    pub positions: Vec<Point3f>,
    /// Degree zero spherical-harmonics coefficients per colour channel.
    pub sh_dc: Option<Vec<[Float; 3]>>,
    pub opacity: Option<Vec<Float>>,
    /// Log-space scales.
    pub scale: Option<Vec<[Float; 3]>>,
    /// Rotations, `(x, y, z, w)`.
    pub rotation: Option<Vec<[Float; 4]>>,
}

fn check_len<T>(name: &str, attr: &Option<Vec<T>>, expected: usize) -> Result<(), SplatError> {
    if let Some(values) = attr {
        if values.len() != expected {
            let msg = format!(
                "{} has {} entries, expected {}",
                name,
                values.len(),
                expected
            );
            return Err(SplatError::InvalidArgument(msg));
        }
    }
    return Ok(());
}

/// `max(SH_C0 * dc + 0.5, 0)`.
pub fn sh_dc_to_colour(dc: Float) -> Float {
    return Float::max(SH_C0 * dc + 0.5, 0.0);
}

impl SceneData {
    pub fn from_positions(positions: Vec<Point3f>) -> Self {
        SceneData {
            positions,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        return self.positions.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.positions.is_empty();
    }

    pub fn validate(&self) -> Result<(), SplatError> {
        if self.positions.is_empty() {
            return Err(SplatError::invalid_argument("scene has no positions"));
        }
        let n = self.positions.len();
        check_len("sh_dc", &self.sh_dc, n)?;
        check_len("opacity", &self.opacity, n)?;
        check_len("scale", &self.scale, n)?;
        check_len("rotation", &self.rotation, n)?;
        return Ok(());
    }

    /// Builds the splat collection, `gid` counting from 1 in input order.
    pub fn to_gaussians(&self) -> Result<Vec<Gaussian3D>, SplatError> {
        self.validate()?;
        info!("Generating {} gaussians", self.positions.len());
        let gaussians = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut g = Gaussian3D::new(p, i as Float + 1.0);
                if let Some(dc) = self.sh_dc.as_ref() {
                    g.colour = [
                        sh_dc_to_colour(dc[i][0]),
                        sh_dc_to_colour(dc[i][1]),
                        sh_dc_to_colour(dc[i][2]),
                        1.0,
                    ];
                }
                if let Some(opacity) = self.opacity.as_ref() {
                    g.colour[3] = opacity[i];
                }
                if let Some(scale) = self.scale.as_ref() {
                    g.scale = Vector3f::from(scale[i]);
                }
                if let Some(rotation) = self.rotation.as_ref() {
                    g.rot = Quaternion::from(rotation[i]);
                }
                g
            })
            .collect();
        return Ok(gaussians);
    }

    /// Plain points carrying the decoded splat colours.
    pub fn to_points(&self) -> Result<Vec<ScenePoint>, SplatError> {
        let points = self
            .to_gaussians()?
            .iter()
            .map(|g| ScenePoint::new(g.position(), g.rgb()))
            .collect();
        return Ok(points);
    }

    pub fn bounds(&self) -> Result<Bounds3f, SplatError> {
        return Bounds3f::from_points(self.positions.iter());
    }
}

/// Moves the cloud so its bounds centroid sits at the origin and flips z,
/// returning the bounds of the result.
pub fn recentre_points(points: &mut [Point3f]) -> Result<Bounds3f, SplatError> {
    let bounds = Bounds3f::from_points(points.iter())?;
    let centre = bounds.centroid();
    debug!("recentring {} points about {:?}", points.len(), centre);
    for p in points.iter_mut() {
        *p -= centre;
        p.z = -p.z;
    }
    return Bounds3f::from_points(points.iter());
}
