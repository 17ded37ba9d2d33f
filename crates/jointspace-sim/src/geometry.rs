//! 平面线段几何

use nalgebra::{Point2, Vector2};

/// 共线判定容差
const COLLINEAR_EPSILON: f64 = 1e-12;

/// 平面线段（一节连杆）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// 长度
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// 点到线段（不是无限长直线）的最短距离
    pub fn distance_to_point(&self, point: &Point2<f64>) -> f64 {
        let d = self.end - self.start;
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return (point - self.start).norm();
        }
        let t = ((point - self.start).dot(&d) / len_sq).clamp(0.0, 1.0);
        (point - (self.start + d * t)).norm()
    }

    /// 两条线段是否相交（含端点接触与共线重叠）
    pub fn intersects(&self, other: &Segment) -> bool {
        let d1 = cross(other.end - other.start, self.start - other.start);
        let d2 = cross(other.end - other.start, self.end - other.start);
        let d3 = cross(self.end - self.start, other.start - self.start);
        let d4 = cross(self.end - self.start, other.end - self.start);

        if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        {
            return true;
        }

        (d1.abs() < COLLINEAR_EPSILON && within_box(&self.start, other))
            || (d2.abs() < COLLINEAR_EPSILON && within_box(&self.end, other))
            || (d3.abs() < COLLINEAR_EPSILON && within_box(&other.start, self))
            || (d4.abs() < COLLINEAR_EPSILON && within_box(&other.end, self))
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// 点是否落在线段的包围盒内
#[inline]
fn within_box(p: &Point2<f64>, s: &Segment) -> bool {
    p.x >= s.start.x.min(s.end.x)
        && p.x <= s.start.x.max(s.end.x)
        && p.y >= s.start.y.min(s.end.y)
        && p.y <= s.start.y.max(s.end.y)
}
