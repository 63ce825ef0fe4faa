use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Point or offset in logical pixels, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Vec2 {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        [v.x, v.y]
    }
}

impl From<Vec2> for lyon::math::Point {
    #[inline]
    fn from(v: Vec2) -> lyon::math::Point {
        lyon::math::point(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(30.0, 60.0);
        let b = Vec2::new(100.0, 50.0);
        assert_eq!(a + b, Vec2::new(130.0, 110.0));
        assert_eq!(b - a, Vec2::new(70.0, -10.0));
        assert_eq!(-a, Vec2::new(-30.0, -60.0));
        assert_eq!(b * 0.5, Vec2::new(50.0, 25.0));
        assert_eq!(b / 2.0, Vec2::new(50.0, 25.0));
    }

    #[test]
    fn add_assign_offsets_in_place() {
        let mut p = Vec2::new(1.0, 2.0);
        p += Vec2::new(10.0, 20.0);
        assert_eq!(p, Vec2::new(11.0, 22.0));
    }

    #[test]
    fn converts_to_lyon_point() {
        let p: lyon::math::Point = Vec2::new(170.0, 190.0).into();
        assert_eq!((p.x, p.y), (170.0, 190.0));
    }
}
