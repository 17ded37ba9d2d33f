//! 仿真环境：平面上的圆形障碍物
//!
//! 环境通过 `Arc` 在多个机器人实例之间共享，构建后只读。

use crate::geometry::Segment;
use nalgebra::Point2;

/// 圆形障碍物
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius: radius.abs(),
        }
    }

    /// 线段是否进入障碍物（距离圆心不超过半径）
    #[inline]
    pub fn touches(&self, segment: &Segment) -> bool {
        segment.distance_to_point(&self.center) <= self.radius
    }
}

/// 仿真环境
#[derive(Debug, Clone, Default)]
pub struct SimEnvironment {
    name: String,
    obstacles: Vec<Obstacle>,
}

impl SimEnvironment {
    /// 创建空环境
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            obstacles: Vec::new(),
        }
    }

    /// 添加障碍物
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// 添加圆形障碍物
    pub fn with_circle(self, x: f64, y: f64, radius: f64) -> Self {
        self.with_obstacle(Obstacle::new(x, y, radius))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// 线段是否与任一障碍物碰撞
    pub fn collides(&self, segment: &Segment) -> bool {
        self.obstacles.iter().any(|o| o.touches(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_environment_never_collides() {
        let env = SimEnvironment::new("empty");
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert!(!env.collides(&s));
        assert_eq!(env.name(), "empty");
    }

    #[test]
    fn test_circle_collision() {
        let env = SimEnvironment::new("one")
            .with_circle(1.0, 0.5, 0.6)
            .with_circle(5.0, 5.0, 0.1);
        assert_eq!(env.obstacles().len(), 2);

        let near = Segment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0));
        let far = Segment::new(Point2::new(0.0, -1.0), Point2::new(2.0, -1.0));
        assert!(env.collides(&near));
        assert!(!env.collides(&far));
    }

    #[test]
    fn test_negative_radius_normalized() {
        assert_eq!(Obstacle::new(0.0, 0.0, -2.0).radius, 2.0);
    }
}
