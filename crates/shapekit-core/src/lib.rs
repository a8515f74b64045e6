//! Shapekit 核心领域模型
//!
//! 提供几何实体、观察者机制、特征缓存与规约查询功能。
//!
//! # 架构设计
//!
//! 三个要素构成核心：
//! - `Shape`: 带身份的几何实体，变更时推送通知给观察者
//! - `Warehouse`: 派生特征缓存（面积、体积、周长），作为观察者随变更重算
//! - `Specification`: 可用 AND/OR/NOT 组合的布尔查询谓词
//!
//! # 示例
//!
//! ```rust
//! use shapekit_core::prelude::*;
//!
//! let warehouse = Warehouse::shared();
//! let mut repository = ShapeRepository::new(warehouse.clone());
//!
//! let sphere = Shape::sphere("s1", "Orb", Point::new(0.0, 0.0, 0.0), 5.0).into_shared();
//! repository.add(sphere);
//!
//! let cached = warehouse.borrow().characteristics(&ShapeId::new("s1"));
//! println!("Volume: {:?}", cached.and_then(|c| c.volume));
//! ```

pub mod comparators;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod math;
pub mod repository;
pub mod specification;
pub mod warehouse;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::comparators;
    pub use crate::entity::{
        ObserverHandle, Shape, ShapeId, ShapeObserver, SharedObserver, SharedShape,
    };
    pub use crate::error::{CoreError, ObserverError};
    pub use crate::geometry::{Geometry, Point, Sphere, Triangle};
    pub use crate::math::{Point3, Vector3, EPSILON, GEOMETRY_EPSILON};
    pub use crate::repository::ShapeRepository;
    pub use crate::specification::{
        ShapeByAreaRangeSpecification, ShapeByDistanceRangeSpecification, ShapeByIdSpecification,
        ShapeByNameSpecification, ShapeByPerimeterRangeSpecification,
        ShapeByVolumeRangeSpecification, ShapeInFirstQuadrantSpecification, Specification,
    };
    pub use crate::warehouse::{ShapeCharacteristics, SharedWarehouse, Warehouse};
}
