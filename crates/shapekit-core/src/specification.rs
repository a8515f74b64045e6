//! 规约（Specification）查询谓词
//!
//! 每个规约暴露 `is_satisfied_by(&Shape) -> bool`，可经 `and`/`or`/
//! `not` 组合成谓词树。规约无可变状态、无副作用，可自由复用与共享。
//!
//! 范围类规约两端均为闭区间；图形不具备相应度量能力时结果为
//! `false`，而不是错误。范围判定总是实时计算，不读特征缓存。

use crate::entity::{Shape, ShapeId};

/// 图形查询谓词
pub trait Specification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool;

    /// 合取组合
    fn and<S: Specification>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
    {
        AndSpecification {
            left: self,
            right: other,
        }
    }

    /// 析取组合
    fn or<S: Specification>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
    {
        OrSpecification {
            left: self,
            right: other,
        }
    }

    /// 取反
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification { inner: self }
    }
}

/// 合取规约
#[derive(Debug, Clone)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<L: Specification, R: Specification> Specification for AndSpecification<L, R> {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        self.left.is_satisfied_by(shape) && self.right.is_satisfied_by(shape)
    }
}

/// 析取规约
#[derive(Debug, Clone)]
pub struct OrSpecification<L, R> {
    left: L,
    right: R,
}

impl<L: Specification, R: Specification> Specification for OrSpecification<L, R> {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        self.left.is_satisfied_by(shape) || self.right.is_satisfied_by(shape)
    }
}

/// 取反规约
#[derive(Debug, Clone)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S: Specification> Specification for NotSpecification<S> {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        !self.inner.is_satisfied_by(shape)
    }
}

/// 按ID精确匹配
#[derive(Debug, Clone)]
pub struct ShapeByIdSpecification {
    id: ShapeId,
}

impl ShapeByIdSpecification {
    pub fn new(id: impl Into<ShapeId>) -> Self {
        Self { id: id.into() }
    }
}

impl Specification for ShapeByIdSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        *shape.id() == self.id
    }
}

/// 按名称精确匹配
#[derive(Debug, Clone)]
pub struct ShapeByNameSpecification {
    name: String,
}

impl ShapeByNameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification for ShapeByNameSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        shape.name() == self.name
    }
}

/// 第一卦限规约：全部定义点的所有坐标均非负
///
/// 三角形检查三个顶点，球体仅检查球心。
#[derive(Debug, Clone, Default)]
pub struct ShapeInFirstQuadrantSpecification;

impl Specification for ShapeInFirstQuadrantSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        shape
            .geometry()
            .defining_points()
            .iter()
            .all(|p| p.is_in_first_octant())
    }
}

/// 代表点到原点距离的闭区间规约
#[derive(Debug, Clone)]
pub struct ShapeByDistanceRangeSpecification {
    min: f64,
    max: f64,
}

impl ShapeByDistanceRangeSpecification {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Specification for ShapeByDistanceRangeSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        let distance = shape.geometry().representative_point().distance_from_origin();
        distance >= self.min && distance <= self.max
    }
}

/// 按度量能力的闭区间判定；能力缺失时为 false
fn measure_in_range(measure: Option<f64>, min: f64, max: f64) -> bool {
    match measure {
        Some(value) => value >= min && value <= max,
        None => false,
    }
}

/// 面积闭区间规约
#[derive(Debug, Clone)]
pub struct ShapeByAreaRangeSpecification {
    min: f64,
    max: f64,
}

impl ShapeByAreaRangeSpecification {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Specification for ShapeByAreaRangeSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        measure_in_range(shape.geometry().area(), self.min, self.max)
    }
}

/// 体积闭区间规约
#[derive(Debug, Clone)]
pub struct ShapeByVolumeRangeSpecification {
    min: f64,
    max: f64,
}

impl ShapeByVolumeRangeSpecification {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Specification for ShapeByVolumeRangeSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        measure_in_range(shape.geometry().volume(), self.min, self.max)
    }
}

/// 周长闭区间规约
#[derive(Debug, Clone)]
pub struct ShapeByPerimeterRangeSpecification {
    min: f64,
    max: f64,
}

impl ShapeByPerimeterRangeSpecification {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Specification for ShapeByPerimeterRangeSpecification {
    fn is_satisfied_by(&self, shape: &Shape) -> bool {
        measure_in_range(shape.geometry().perimeter(), self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn sphere() -> Shape {
        Shape::sphere("s1", "Orb", Point::new(1.0, 1.0, 1.0), 5.0)
    }

    fn triangle() -> Shape {
        Shape::triangle(
            "t1",
            "Tri",
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn test_by_id_and_name() {
        let shape = sphere();
        assert!(ShapeByIdSpecification::new("s1").is_satisfied_by(&shape));
        assert!(!ShapeByIdSpecification::new("s2").is_satisfied_by(&shape));
        assert!(ShapeByNameSpecification::new("Orb").is_satisfied_by(&shape));
        assert!(!ShapeByNameSpecification::new("orb").is_satisfied_by(&shape));
    }

    #[test]
    fn test_first_quadrant() {
        assert!(ShapeInFirstQuadrantSpecification.is_satisfied_by(&sphere()));
        // 边界点（坐标为 0）也算第一卦限
        assert!(ShapeInFirstQuadrantSpecification.is_satisfied_by(&triangle()));

        let outside = Shape::triangle(
            "t2",
            "Neg",
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, -4.0, 0.0),
        );
        assert!(!ShapeInFirstQuadrantSpecification.is_satisfied_by(&outside));
    }

    #[test]
    fn test_distance_range_scenario() {
        let spec = ShapeByDistanceRangeSpecification::new(0.0, 5.0);
        // 代表点 (1,1,1)：距原点 √3，在区间内
        assert!(spec.is_satisfied_by(&sphere()));
        // 代表点 (10,10,10)：距原点 √300，在区间外
        let far = Shape::sphere("s2", "Far", Point::new(10.0, 10.0, 10.0), 5.0);
        assert!(!spec.is_satisfied_by(&far));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let shape = triangle();
        // 周长恰为 12
        assert!(ShapeByPerimeterRangeSpecification::new(12.0, 12.0).is_satisfied_by(&shape));
        assert!(!ShapeByPerimeterRangeSpecification::new(12.001, 20.0).is_satisfied_by(&shape));
    }

    #[test]
    fn test_missing_capability_is_false_not_error() {
        // 三角形没有体积能力
        assert!(!ShapeByVolumeRangeSpecification::new(0.0, f64::MAX).is_satisfied_by(&triangle()));
        // 球体没有周长能力
        assert!(!ShapeByPerimeterRangeSpecification::new(0.0, f64::MAX).is_satisfied_by(&sphere()));
    }

    #[test]
    fn test_composition_laws() {
        let shapes = [sphere(), triangle()];
        for shape in &shapes {
            let p = ShapeInFirstQuadrantSpecification;
            let q = ShapeByDistanceRangeSpecification::new(0.0, 5.0);

            let and = p.is_satisfied_by(shape) && q.is_satisfied_by(shape);
            assert_eq!(
                ShapeInFirstQuadrantSpecification
                    .and(ShapeByDistanceRangeSpecification::new(0.0, 5.0))
                    .is_satisfied_by(shape),
                and
            );

            let or = p.is_satisfied_by(shape) || q.is_satisfied_by(shape);
            assert_eq!(
                ShapeInFirstQuadrantSpecification
                    .or(ShapeByDistanceRangeSpecification::new(0.0, 5.0))
                    .is_satisfied_by(shape),
                or
            );

            assert_eq!(
                ShapeInFirstQuadrantSpecification.not().is_satisfied_by(shape),
                !p.is_satisfied_by(shape)
            );
        }
    }

    #[test]
    fn test_nested_composition() {
        let shape = sphere();
        // (按ID ∧ ¬按名称) ∨ 面积范围
        let composed = ShapeByIdSpecification::new("s1")
            .and(ShapeByNameSpecification::new("Wrong").not())
            .or(ShapeByAreaRangeSpecification::new(0.0, 1.0));
        assert!(composed.is_satisfied_by(&shape));
    }
}
