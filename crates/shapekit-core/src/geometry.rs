//! 几何值类型定义
//!
//! 支持的图形：
//! - 点 (Point) — 不可变三维坐标值
//! - 三角形 (Triangle) — 三个顶点
//! - 球体 (Sphere) — 球心 + 半径
//!
//! `Triangle` 与 `Sphere` 是一次构造的值类型；可变实体语义由
//! `entity::Shape` 提供。坐标有效性（有限、非退化、半径为正）由
//! shapekit-file 的校验器在构造前保证，这里不做校验。

use crate::math::{Point3, EPSILON, GEOMETRY_EPSILON};
use serde::{Deserialize, Serialize};

/// 三维点（不可变值类型）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    position: Point3,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// 二维构造，z 取 0
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// 到另一点的欧氏距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// 到原点的欧氏距离
    pub fn distance_from_origin(&self) -> f64 {
        self.position.coords.norm()
    }

    /// 所有坐标是否均非负（第一卦限，含坐标面）
    pub fn is_in_first_octant(&self) -> bool {
        self.position.x >= 0.0 && self.position.y >= 0.0 && self.position.z >= 0.0
    }
}

/// 三角形
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub point_a: Point,
    pub point_b: Point,
    pub point_c: Point,
}

impl Triangle {
    pub fn new(point_a: Point, point_b: Point, point_c: Point) -> Self {
        Self {
            point_a,
            point_b,
            point_c,
        }
    }

    /// 三条边长，依次为顶点 A、B、C 的对边
    pub fn side_lengths(&self) -> [f64; 3] {
        [
            self.point_b.distance_to(&self.point_c),
            self.point_a.distance_to(&self.point_c),
            self.point_a.distance_to(&self.point_b),
        ]
    }

    /// 周长：三边之和
    pub fn perimeter(&self) -> f64 {
        let [a, b, c] = self.side_lengths();
        a + b + c
    }

    /// 面积：海伦公式
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.side_lengths();
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    /// 从小到大排序的边长
    fn sorted_sides(&self) -> [f64; 3] {
        let mut sides = self.side_lengths();
        sides.sort_by(f64::total_cmp);
        sides
    }

    /// 是否直角三角形
    pub fn is_right(&self) -> bool {
        let [a, b, c] = self.sorted_sides();
        (a * a + b * b - c * c).abs() < GEOMETRY_EPSILON
    }

    /// 是否等腰三角形
    pub fn is_isosceles(&self) -> bool {
        let [a, b, c] = self.side_lengths();
        (a - b).abs() < GEOMETRY_EPSILON
            || (b - c).abs() < GEOMETRY_EPSILON
            || (c - a).abs() < GEOMETRY_EPSILON
    }

    /// 是否等边三角形
    pub fn is_equilateral(&self) -> bool {
        let [a, b, c] = self.side_lengths();
        (a - b).abs() < GEOMETRY_EPSILON && (b - c).abs() < GEOMETRY_EPSILON
    }

    /// 是否锐角三角形
    pub fn is_acute(&self) -> bool {
        let [a, b, c] = self.sorted_sides();
        a * a + b * b > c * c + GEOMETRY_EPSILON
    }

    /// 是否钝角三角形
    pub fn is_obtuse(&self) -> bool {
        let [a, b, c] = self.sorted_sides();
        a * a + b * b < c * c - GEOMETRY_EPSILON
    }
}

/// 球体
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// 表面积 = 4πr²
    pub fn surface_area(&self) -> f64 {
        4.0 * std::f64::consts::PI * self.radius * self.radius
    }

    /// 体积 = (4/3)πr³
    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * std::f64::consts::PI * self.radius.powi(3)
    }

    /// 是否与 XY 坐标面相切
    pub fn touches_xy_plane(&self) -> bool {
        (self.center.z().abs() - self.radius).abs() < EPSILON
    }

    /// 是否与 XZ 坐标面相切
    pub fn touches_xz_plane(&self) -> bool {
        (self.center.y().abs() - self.radius).abs() < EPSILON
    }

    /// 是否与 YZ 坐标面相切
    pub fn touches_yz_plane(&self) -> bool {
        (self.center.x().abs() - self.radius).abs() < EPSILON
    }

    /// 是否与任一坐标面相切
    pub fn touches_any_coordinate_plane(&self) -> bool {
        self.touches_xy_plane() || self.touches_xz_plane() || self.touches_yz_plane()
    }

    /// XY 坐标面切割出的球冠体积比（小块 / 大块）
    pub fn volume_ratio_xy(&self) -> f64 {
        self.cap_volume_ratio(self.center.z())
    }

    /// XZ 坐标面切割出的球冠体积比
    pub fn volume_ratio_xz(&self) -> f64 {
        self.cap_volume_ratio(self.center.y())
    }

    /// YZ 坐标面切割出的球冠体积比
    pub fn volume_ratio_yz(&self) -> f64 {
        self.cap_volume_ratio(self.center.x())
    }

    /// 按球心到切割面的有向距离计算两个球冠的体积比
    ///
    /// 切割面过球心时为 0.5；球体不与切割面相交时为 0。
    fn cap_volume_ratio(&self, offset: f64) -> f64 {
        if offset.abs() < EPSILON {
            return 0.5;
        }
        if offset.abs() >= self.radius {
            return 0.0;
        }

        // 球冠体积 V = πh²(3r - h) / 3
        let h1 = self.radius - offset;
        let h2 = self.radius + offset;
        let volume1 = std::f64::consts::PI * h1 * h1 * (3.0 * self.radius - h1) / 3.0;
        let volume2 = std::f64::consts::PI * h2 * h2 * (3.0 * self.radius - h2) / 3.0;

        let min_volume = volume1.min(volume2);
        let max_volume = volume1.max(volume2);

        if max_volume > EPSILON {
            min_volume / max_volume
        } else {
            0.0
        }
    }
}

/// 几何类型枚举
///
/// 封闭联合体：新增图形种类时，所有匹配点在编译期被迫更新。
/// 能力集以 `Option` 表达——某变体不支持的度量返回 `None`，
/// 而不是运行时探测方法是否存在。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Triangle(Triangle),
    Sphere(Sphere),
}

impl Geometry {
    /// 获取几何的类型名称
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Triangle(_) => "Triangle",
            Geometry::Sphere(_) => "Sphere",
        }
    }

    /// 面积（两种变体均支持）
    pub fn area(&self) -> Option<f64> {
        match self {
            Geometry::Triangle(t) => Some(t.area()),
            Geometry::Sphere(s) => Some(s.surface_area()),
        }
    }

    /// 体积（仅球体支持）
    pub fn volume(&self) -> Option<f64> {
        match self {
            Geometry::Triangle(_) => None,
            Geometry::Sphere(s) => Some(s.volume()),
        }
    }

    /// 周长（仅三角形支持）
    pub fn perimeter(&self) -> Option<f64> {
        match self {
            Geometry::Triangle(t) => Some(t.perimeter()),
            Geometry::Sphere(_) => None,
        }
    }

    /// 代表点：三角形取顶点 A，球体取球心
    pub fn representative_point(&self) -> &Point {
        match self {
            Geometry::Triangle(t) => &t.point_a,
            Geometry::Sphere(s) => &s.center,
        }
    }

    /// 定义点集合：三角形为三个顶点，球体仅为球心
    pub fn defining_points(&self) -> Vec<&Point> {
        match self {
            Geometry::Triangle(t) => vec![&t.point_a, &t.point_b, &t.point_c],
            Geometry::Sphere(s) => vec![&s.center],
        }
    }
}
