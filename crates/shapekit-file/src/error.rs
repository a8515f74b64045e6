//! 输入处理错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Shape creation error: {0}")]
    Creation(String),
}
