//! 数学基础类型与容差
//!
//! 基于 nalgebra 的三维点/向量别名，所有距离均为标准欧氏度量。

/// 三维点
pub type Point3 = nalgebra::Point3<f64>;

/// 三维向量
pub type Vector3 = nalgebra::Vector3<f64>;

/// 通用数值容差
pub const EPSILON: f64 = 1e-10;

/// 几何判定容差（三角形退化与分类）
pub const GEOMETRY_EPSILON: f64 = 1e-6;
