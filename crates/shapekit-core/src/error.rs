//! 核心错误定义
//!
//! 核心本身几乎不产生错误：能力缺失与查找未命中一律以 `Option`
//! 表达。仅剩两类——对错误几何种类调用设值方法，以及观察者回调
//! 自身的失败（后者只被记录，绝不向变更方传播）。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("shape '{id}' is a {actual}, expected a {expected}")]
    KindMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// 观察者回调失败
///
/// 由失败的观察者携带，通知循环记录后继续执行其余观察者。
#[derive(Error, Debug)]
#[error("observer '{observer}' failed: {reason}")]
pub struct ObserverError {
    pub observer: String,
    pub reason: String,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            observer: observer.into(),
            reason: reason.into(),
        }
    }
}
