//! 图形工厂
//!
//! 从原始数值元组构造经过完整校验的图形实体：
//! - 三角形：9 个值（三组 x,y,z）
//! - 球体：4 个值（球心 x,y,z + 半径）
//!
//! 核心只消费这里产出的实体，从不接触原始元组。

use crate::error::ShapeFileError;
use crate::validate;
use shapekit_core::entity::Shape;
use shapekit_core::geometry::Point;

/// 从数值元组构造图形
pub trait ShapeFactory {
    fn create(&self, id: &str, name: &str, data: &[f64]) -> Result<Shape, ShapeFileError>;
}

fn check_parameter_count(
    data: &[f64],
    expected: usize,
    shape_name: &str,
) -> Result<(), ShapeFileError> {
    if data.len() != expected {
        return Err(ShapeFileError::Creation(format!(
            "invalid parameter count for {shape_name}: expected {expected}, got {}",
            data.len()
        )));
    }
    Ok(())
}

/// 三角形工厂
#[derive(Debug, Default)]
pub struct TriangleFactory;

impl TriangleFactory {
    const EXPECTED_PARAMETERS: usize = 9;

    fn build(id: &str, name: &str, data: &[f64]) -> Result<Shape, ShapeFileError> {
        check_parameter_count(data, Self::EXPECTED_PARAMETERS, "Triangle")?;

        for chunk in data.chunks_exact(3) {
            validate::validate_point(chunk[0], chunk[1], chunk[2])?;
        }

        let point_a = Point::new(data[0], data[1], data[2]);
        let point_b = Point::new(data[3], data[4], data[5]);
        let point_c = Point::new(data[6], data[7], data[8]);
        validate::validate_triangle_points(&point_a, &point_b, &point_c)?;

        Ok(Shape::triangle(id, name, point_a, point_b, point_c))
    }
}

impl ShapeFactory for TriangleFactory {
    fn create(&self, id: &str, name: &str, data: &[f64]) -> Result<Shape, ShapeFileError> {
        match Self::build(id, name, data) {
            Ok(shape) => {
                tracing::info!(id, name, "triangle created");
                Ok(shape)
            }
            Err(err) => {
                tracing::error!(id, error = %err, "failed to create triangle");
                Err(ShapeFileError::Creation(format!(
                    "cannot create triangle: {err}"
                )))
            }
        }
    }
}

/// 球体工厂
#[derive(Debug, Default)]
pub struct SphereFactory;

impl SphereFactory {
    const EXPECTED_PARAMETERS: usize = 4;

    fn build(id: &str, name: &str, data: &[f64]) -> Result<Shape, ShapeFileError> {
        check_parameter_count(data, Self::EXPECTED_PARAMETERS, "Sphere")?;

        let [x, y, z, radius] = [data[0], data[1], data[2], data[3]];
        validate::validate_point(x, y, z)?;
        validate::validate_radius(radius)?;

        Ok(Shape::sphere(id, name, Point::new(x, y, z), radius))
    }
}

impl ShapeFactory for SphereFactory {
    fn create(&self, id: &str, name: &str, data: &[f64]) -> Result<Shape, ShapeFileError> {
        match Self::build(id, name, data) {
            Ok(shape) => {
                tracing::info!(id, name, "sphere created");
                Ok(shape)
            }
            Err(err) => {
                tracing::error!(id, error = %err, "failed to create sphere");
                Err(ShapeFileError::Creation(format!(
                    "cannot create sphere: {err}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_core::geometry::Geometry;

    #[test]
    fn test_sphere_factory() {
        let factory = SphereFactory;
        let shape = factory
            .create("s1", "Orb", &[1.0, 2.0, 3.0, 5.0])
            .unwrap();

        assert_eq!(shape.id().as_str(), "s1");
        match shape.geometry() {
            Geometry::Sphere(s) => {
                assert_eq!(s.radius, 5.0);
                assert_eq!(s.center.z(), 3.0);
            }
            other => panic!("expected sphere, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_sphere_factory_rejects_bad_input() {
        let factory = SphereFactory;
        // 参数个数错误
        assert!(factory.create("s1", "Orb", &[1.0, 2.0, 3.0]).is_err());
        // 半径非正
        assert!(factory.create("s1", "Orb", &[1.0, 2.0, 3.0, 0.0]).is_err());
        // 坐标非有限
        assert!(factory
            .create("s1", "Orb", &[f64::NAN, 2.0, 3.0, 1.0])
            .is_err());
    }

    #[test]
    fn test_triangle_factory() {
        let factory = TriangleFactory;
        let shape = factory
            .create(
                "t1",
                "Tri",
                &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0, 0.0],
            )
            .unwrap();

        assert_eq!(shape.geometry().perimeter(), Some(12.0));
    }

    #[test]
    fn test_factory_errors_are_creation_variant() {
        // 两个工厂的失败路径都落在 Creation 变体上
        let err = SphereFactory
            .create("s1", "Orb", &[1.0, 2.0, 3.0])
            .unwrap_err();
        assert!(matches!(err, ShapeFileError::Creation(_)));

        let err = TriangleFactory.create("t1", "Tri", &[0.0; 6]).unwrap_err();
        assert!(matches!(err, ShapeFileError::Creation(_)));
    }

    #[test]
    fn test_triangle_factory_rejects_degenerate() {
        let factory = TriangleFactory;
        // 共线
        assert!(factory
            .create(
                "t1",
                "Tri",
                &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0],
            )
            .is_err());
        // 参数个数错误
        assert!(factory.create("t1", "Tri", &[0.0; 6]).is_err());
    }
}
