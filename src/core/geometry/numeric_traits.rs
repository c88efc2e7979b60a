pub trait NumberType {
    fn abs(x: Self) -> Self;
    fn min_value(a: Self, b: Self) -> Self;
    fn max_value(a: Self, b: Self) -> Self;
}

impl NumberType for f32 {
    fn abs(x: Self) -> Self {
        Self::abs(x)
    }
    fn min_value(a: Self, b: Self) -> Self {
        Self::min(a, b)
    }
    fn max_value(a: Self, b: Self) -> Self {
        Self::max(a, b)
    }
}

impl NumberType for i32 {
    fn abs(x: Self) -> Self {
        Self::abs(x)
    }
    fn min_value(a: Self, b: Self) -> Self {
        Ord::min(a, b)
    }
    fn max_value(a: Self, b: Self) -> Self {
        Ord::max(a, b)
    }
}

pub trait FloatType {
    fn sqrt(x: Self) -> Self;
}

impl FloatType for f32 {
    fn sqrt(x: Self) -> Self {
        Self::sqrt(x)
    }
}
