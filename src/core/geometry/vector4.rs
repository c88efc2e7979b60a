use super::vector3::Vector3;
use std::ops;

/// Homogeneous coordinate, used for clip-space positions and Gaussian means.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Copy> Vector4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vector4::<T> { x, y, z, w }
    }

    pub fn from_point(p: &Vector3<T>, w: T) -> Self {
        Vector4::<T> {
            x: p.x,
            y: p.y,
            z: p.z,
            w,
        }
    }

    pub fn xyz(&self) -> Vector3<T> {
        Vector3::<T>::new(self.x, self.y, self.z)
    }
}

impl<T: Copy + std::ops::Div<Output = T>> Vector4<T> {
    /// Perspective divide.
    #[inline]
    pub fn dehomogenize(&self) -> Vector3<T> {
        Vector3::<T>::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }
}

impl<T: std::ops::Sub<Output = T>> ops::Sub<Vector4<T>> for Vector4<T> {
    type Output = Vector4<T>;
    #[inline]
    fn sub(self, rhs: Vector4<T>) -> Vector4<T> {
        return Vector4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        };
    }
}

impl<T> ops::Index<usize> for Vector4<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.w,
        }
    }
}

impl<T: Copy> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(value: [T; 4]) -> Self {
        Vector4::<T>::new(value[0], value[1], value[2], value[3])
    }
}
