//! 数值与几何参数校验
//!
//! 在实体构造之前执行：
//! - 坐标必须是有限数
//! - 球体半径必须严格为正
//! - 三角形三点不得重合、必须满足严格三角不等式（带容差）

use crate::error::ShapeFileError;
use shapekit_core::geometry::Point;

/// 半径下界容差
pub const RADIUS_EPSILON: f64 = 1e-10;

/// 三角形退化判定容差
pub const TRIANGLE_EPSILON: f64 = 1e-6;

/// 校验单个坐标为有限数
pub fn validate_coordinate(value: f64) -> Result<(), ShapeFileError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ShapeFileError::Validation(
            "coordinate must be a valid finite number".to_string(),
        ));
    }
    Ok(())
}

/// 校验一组点坐标
pub fn validate_point(x: f64, y: f64, z: f64) -> Result<(), ShapeFileError> {
    validate_coordinate(x)?;
    validate_coordinate(y)?;
    validate_coordinate(z)?;
    Ok(())
}

/// 校验球体半径：有限且严格为正
pub fn validate_radius(radius: f64) -> Result<(), ShapeFileError> {
    if radius.is_nan() || radius.is_infinite() {
        return Err(ShapeFileError::Validation(
            "sphere radius must be a valid finite number".to_string(),
        ));
    }
    if radius <= RADIUS_EPSILON {
        return Err(ShapeFileError::Validation(
            "sphere radius must be positive".to_string(),
        ));
    }
    Ok(())
}

/// 校验三点构成有效三角形
pub fn validate_triangle_points(
    point_a: &Point,
    point_b: &Point,
    point_c: &Point,
) -> Result<(), ShapeFileError> {
    let side_a = point_b.distance_to(point_c);
    let side_b = point_a.distance_to(point_c);
    let side_c = point_a.distance_to(point_b);

    if side_a < TRIANGLE_EPSILON || side_b < TRIANGLE_EPSILON || side_c < TRIANGLE_EPSILON {
        return Err(ShapeFileError::Validation(
            "points are too close to form a triangle".to_string(),
        ));
    }

    if side_a + side_b <= side_c + TRIANGLE_EPSILON
        || side_b + side_c <= side_a + TRIANGLE_EPSILON
        || side_c + side_a <= side_b + TRIANGLE_EPSILON
    {
        return Err(ShapeFileError::Validation(
            "points do not form a valid triangle (collinear or invalid)".to_string(),
        ));
    }

    Ok(())
}
