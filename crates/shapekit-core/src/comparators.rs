//! 图形比较器
//!
//! 纯函数形式的全序比较器，可跨排序复用：
//! - 按ID / 按名称（字典序，Unicode 码点顺序）
//! - 按代表点坐标（三角形取顶点 A，球体取球心；`f64::total_cmp`
//!   保证全序）

use crate::entity::Shape;
use std::cmp::Ordering;

/// 按ID字典序
pub fn by_id(a: &Shape, b: &Shape) -> Ordering {
    a.id().as_str().cmp(b.id().as_str())
}

/// 按名称字典序
///
/// 比较采用 Unicode 码点顺序，不做区域（locale）感知的排序规则；
/// 对非 ASCII 名称的排序结果可能与本地化排序不同。
pub fn by_name(a: &Shape, b: &Shape) -> Ordering {
    a.name().cmp(b.name())
}

/// 按代表点 X 坐标
pub fn by_first_point_x(a: &Shape, b: &Shape) -> Ordering {
    let xa = a.geometry().representative_point().x();
    let xb = b.geometry().representative_point().x();
    xa.total_cmp(&xb)
}

/// 按代表点 Y 坐标
pub fn by_first_point_y(a: &Shape, b: &Shape) -> Ordering {
    let ya = a.geometry().representative_point().y();
    let yb = b.geometry().representative_point().y();
    ya.total_cmp(&yb)
}

/// 按代表点 Z 坐标
pub fn by_first_point_z(a: &Shape, b: &Shape) -> Ordering {
    let za = a.geometry().representative_point().z();
    let zb = b.geometry().representative_point().z();
    za.total_cmp(&zb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn shapes() -> Vec<Shape> {
        vec![
            Shape::sphere("s2", "Beta", Point::new(5.0, -1.0, 2.0), 1.0),
            Shape::sphere("s1", "Alpha", Point::new(-3.0, 4.0, 0.0), 1.0),
            Shape::triangle(
                "t1",
                "Gamma",
                Point::new(0.0, 0.0, 1.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ),
        ]
    }

    #[test]
    fn test_by_id() {
        let mut v = shapes();
        v.sort_by(by_id);
        let ids: Vec<_> = v.iter().map(|s| s.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["s1", "s2", "t1"]);
    }

    #[test]
    fn test_by_name() {
        let mut v = shapes();
        v.sort_by(by_name);
        let names: Vec<_> = v.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_by_first_point_coordinates() {
        let mut v = shapes();
        v.sort_by(by_first_point_x);
        assert_eq!(v[0].id().as_str(), "s1"); // x = -3
        assert_eq!(v[2].id().as_str(), "s2"); // x = 5

        v.sort_by(by_first_point_y);
        assert_eq!(v[0].id().as_str(), "s2"); // y = -1

        v.sort_by(by_first_point_z);
        assert_eq!(v[2].id().as_str(), "s2"); // z = 2
    }

    #[test]
    fn test_sort_idempotence() {
        let mut v = shapes();
        v.sort_by(by_name);
        let first: Vec<_> = v.iter().map(|s| s.id().as_str().to_string()).collect();
        v.sort_by(by_name);
        let second: Vec<_> = v.iter().map(|s| s.id().as_str().to_string()).collect();
        assert_eq!(first, second);
    }
}
