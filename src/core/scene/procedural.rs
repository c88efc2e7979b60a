use super::scene_data::SceneData;
use crate::core::base::*;
use crate::core::rng::Pcg32;

/// Seeded cloud of `count` splats filling a unit ball, with colours that
/// vary smoothly with position. Stands in for a loaded scene.
pub fn procedural_cloud(count: usize, seed: u64) -> SceneData {
    let mut rng = Pcg32::new_sequence(seed);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let p = Point3f::new(
            rng.uniform_range(-1.0, 1.0),
            rng.uniform_range(-1.0, 1.0),
            rng.uniform_range(-1.0, 1.0),
        );
        if p.length_squared() <= 1.0 {
            positions.push(p);
        }
    }
    let sh_dc = positions
        .iter()
        .map(|p| [p.x / SH_C0 * 0.5, p.y / SH_C0 * 0.5, p.z / SH_C0 * 0.5])
        .collect();
    let scale = (0..count)
        .map(|_| {
            let s = rng.uniform_range(-5.0, -3.0);
            [s, s, s]
        })
        .collect();
    return SceneData {
        positions,
        sh_dc: Some(sh_dc),
        opacity: Some(vec![1.0; count]),
        scale: Some(scale),
        rotation: Some(vec![[0.0, 0.0, 0.0, 1.0]; count]),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = procedural_cloud(64, 3);
        let b = procedural_cloud(64, 3);
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
        assert!(a.positions.iter().all(|p| p.length() <= 1.0));
        let bounds = a.bounds().unwrap();
        assert!(bounds.diagonal().length() > 0.0);
    }
}
