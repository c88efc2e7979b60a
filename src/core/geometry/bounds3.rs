use crate::core::base::*;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Bounds3<T> {
    pub min: Vector3<T>,
    pub max: Vector3<T>,
}

impl<T: Copy> Bounds3<T> {
    pub fn new(min: &Vector3<T>, max: &Vector3<T>) -> Self {
        Bounds3::<T> {
            min: *min,
            max: *max,
        }
    }

    pub fn corner(&self, i: usize) -> Vector3<T> {
        assert!(i < 8);
        return Vector3::<T>::new(
            if i & 1 == 0 { self.min.x } else { self.max.x },
            if i & 2 == 0 { self.min.y } else { self.max.y },
            if i & 4 == 0 { self.min.z } else { self.max.z },
        );
    }
}

impl Bounds3f {
    /// Per-axis extrema of a non-empty point set.
    pub fn from_points<'a, I>(points: I) -> Result<Self, SplatError>
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => *p,
            None => {
                return Err(SplatError::invalid_argument(
                    "cannot compute bounds of an empty point set",
                ));
            }
        };
        let bounds = iter.fold(Bounds3f::new(&first, &first), |b, p| b.union_p(p));
        return Ok(bounds);
    }

    pub fn union_p(&self, p: &Point3f) -> Self {
        return Bounds3f {
            min: Vector3f::min(&self.min, p),
            max: Vector3f::max(&self.max, p),
        };
    }

    pub fn centroid(&self) -> Point3f {
        return (self.min + self.max) * 0.5;
    }

    pub fn diagonal(&self) -> Vector3f {
        return self.max - self.min;
    }

    /// Bounds of the eight corners after `m`, e.g. to move world bounds into
    /// eye space.
    pub fn transform(&self, m: &Matrix4x4) -> Bounds3f {
        return m.transform_bounds(self);
    }

    pub fn inside(&self, p: &Point3f) -> bool {
        return p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z;
    }
}

impl std::fmt::Display for Bounds3f {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}, {}) - ({}, {}, {})]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

impl<T: Copy> From<((T, T, T), (T, T, T))> for Bounds3<T> {
    fn from(value: ((T, T, T), (T, T, T))) -> Self {
        Bounds3::<T> {
            min: Vector3::<T>::from(value.0),
            max: Vector3::<T>::from(value.1),
        }
    }
}
