//! # Transform 模块
//!
//! 二维向量与插值工具。

/// 二维向量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// 创建新的向量
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 零向量
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// 线性插值
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f32, f32) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// 标量线性插值
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        // t = 1 时必须精确到达终点
        assert_eq!(lerp(400.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn test_vec2_lerp() {
        let v1 = Vec2::new(0.0, 0.0);
        let v2 = Vec2::new(100.0, 50.0);
        let mid = v1.lerp(v2, 0.5);
        assert_eq!(mid.x, 50.0);
        assert_eq!(mid.y, 25.0);
    }

    #[test]
    fn test_vec2_conversions() {
        let v: Vec2 = (3.0, 4.0).into();
        assert_eq!(v, Vec2::new(3.0, 4.0));
        let t: (f32, f32) = v.into();
        assert_eq!(t, (3.0, 4.0));
    }
}
