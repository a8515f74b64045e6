//! Shapekit 输入处理
//!
//! 核心之外的协作者：
//! - 数值校验（有限性、半径为正、三角形非退化）
//! - 文本文件解析为数值元组
//! - 经校验的图形工厂
//!
//! 核心实体假定输入已通过这里的校验；无效行为在这里被拦截并
//! 报告给调用方，绝不进入核心。

pub mod error;
pub mod factory;
pub mod parser;
pub mod validate;

pub use error::ShapeFileError;
pub use factory::{ShapeFactory, SphereFactory, TriangleFactory};
pub use parser::{parse_file, parse_number};
