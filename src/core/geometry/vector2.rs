use super::numeric_traits::*;
use std::ops;

#[derive(Debug, PartialEq, Eq, Default, Copy, Clone, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2::<T> { x, y }
    }
}

impl<T: Copy + NumberType> Vector2<T> {
    #[inline]
    pub fn abs(&self) -> Self {
        Vector2::<T> {
            x: NumberType::abs(self.x),
            y: NumberType::abs(self.y),
        }
    }
}

impl<T: Copy + NumberType + std::ops::Add<Output = T> + std::ops::Sub<Output = T>> Vector2<T> {
    /// `|a.x - b.x| + |a.y - b.y|`
    #[inline]
    pub fn manhattan_distance(a: &Self, b: &Self) -> T {
        let d = (*a - *b).abs();
        return d.x + d.y;
    }
}

impl<T: std::ops::Add<Output = T>> ops::Add<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        };
    }
}

impl<T: std::ops::Sub<Output = T>> ops::Sub<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        };
    }
}

impl<T: std::ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector2<T> {
        return Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        };
    }
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from(value: (T, T)) -> Self {
        Vector2::<T>::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let v1 = Vector2::<i32>::new(1, 2);
        let v2 = Vector2::<i32>::new(3, 4);
        assert_eq!(v1 + v2, Vector2::new(4, 6));
        assert_eq!(v2 - v1, Vector2::new(2, 2));
        assert_eq!(v1 * 3, Vector2::new(3, 6));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Vector2::<i32>::new(-3, 10);
        let b = Vector2::<i32>::new(4, 2);
        assert_eq!(Vector2::manhattan_distance(&a, &b), 15);
        assert_eq!(Vector2::manhattan_distance(&b, &a), 15);
        assert_eq!(Vector2::manhattan_distance(&a, &a), 0);
    }
}
