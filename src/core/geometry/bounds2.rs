use super::vector2::Vector2;

/// Half-open rectangle `[min, max)`.
#[derive(Debug, PartialEq, Eq, Default, Copy, Clone)]
pub struct Bounds2<T> {
    pub min: Vector2<T>,
    pub max: Vector2<T>,
}

impl<T: Copy> Bounds2<T> {
    pub fn new(min: &Vector2<T>, max: &Vector2<T>) -> Self {
        Bounds2::<T> {
            min: *min,
            max: *max,
        }
    }
}

fn min_<T: Copy + PartialOrd>(a: T, b: T) -> T {
    return if a <= b { a } else { b };
}

fn max_<T: Copy + PartialOrd>(a: T, b: T) -> T {
    return if a >= b { a } else { b };
}

impl<
        T: Copy
            + PartialOrd
            + std::ops::Add<Output = T>
            + std::ops::Sub<Output = T>
            + std::ops::Mul<Output = T>,
    > Bounds2<T>
{
    pub fn area(&self) -> T {
        return (self.max.x - self.min.x) * (self.max.y - self.min.y);
    }

    pub fn diagonal(&self) -> Vector2<T> {
        return self.max - self.min;
    }

    pub fn intersect(&self, other: &Self) -> Self {
        let min = Vector2::<T>::new(max_(self.min.x, other.min.x), max_(self.min.y, other.min.y));
        let max = Vector2::<T>::new(min_(self.max.x, other.max.x), min_(self.max.y, other.max.y));
        return Bounds2 { min, max };
    }

    pub fn is_empty(&self) -> bool {
        return self.min.x >= self.max.x || self.min.y >= self.max.y;
    }

    pub fn inside_exclusive(&self, p: &Vector2<T>) -> bool {
        return p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y;
    }
}

impl Bounds2<i32> {
    /// Integer midpoint, `min + (max - min) / 2`.
    pub fn centroid(&self) -> Vector2<i32> {
        return Vector2::<i32>::new(
            self.min.x + (self.max.x - self.min.x) / 2,
            self.min.y + (self.max.y - self.min.y) / 2,
        );
    }
}

impl<T: Copy> From<((T, T), (T, T))> for Bounds2<T> {
    fn from(value: ((T, T), (T, T))) -> Self {
        Bounds2::<T> {
            min: Vector2::<T>::from(value.0),
            max: Vector2::<T>::from(value.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let b = Bounds2::<i32>::from(((0, 8), (16, 24)));
        assert_eq!(b.area(), 256);
        assert_eq!(b.diagonal(), Vector2::new(16, 16));
        assert_eq!(b.centroid(), Vector2::new(8, 16));
        assert!(b.inside_exclusive(&Vector2::new(0, 8)));
        assert!(!b.inside_exclusive(&Vector2::new(16, 8)));
    }

    #[test]
    fn test_002() {
        let a = Bounds2::<i32>::from(((0, 0), (4, 4)));
        let b = Bounds2::<i32>::from(((2, 2), (8, 8)));
        assert_eq!(a.intersect(&b), Bounds2::from(((2, 2), (4, 4))));
        let c = Bounds2::<i32>::from(((5, 5), (8, 8)));
        assert!(a.intersect(&c).is_empty());
    }
}
