//! 特征缓存（Warehouse）
//!
//! 以图形ID为键缓存派生数值特征（面积、体积、周长）。作为观察者
//! 挂接到被追踪的图形上：每次通知重建该图形的完整记录并整体替换，
//! 摘除后经 `remove_characteristics` 驱逐，不会残留过期条目。
//!
//! 不是全局单例——显式构造，经 `SharedWarehouse` 传入需要它的
//! 仓库；测试各自构造独立实例，无需重置共享状态。

use crate::entity::{Shape, ShapeId, ShapeObserver};
use crate::error::ObserverError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// 单个图形的派生特征记录
///
/// 稀疏记录：仅该图形变体支持的度量被填充。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeCharacteristics {
    pub area: Option<f64>,
    pub volume: Option<f64>,
    pub perimeter: Option<f64>,
}

/// 共享特征缓存引用
pub type SharedWarehouse = Rc<RefCell<Warehouse>>;

/// 特征缓存
#[derive(Debug, Default)]
pub struct Warehouse {
    characteristics: HashMap<ShapeId, ShapeCharacteristics>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构造共享实例
    pub fn shared() -> SharedWarehouse {
        Rc::new(RefCell::new(Self::new()))
    }

    /// 按图形当前状态重建特征记录并整体替换旧记录
    pub fn update(&mut self, shape: &Shape) {
        let geometry = shape.geometry();
        let record = ShapeCharacteristics {
            area: geometry.area(),
            volume: geometry.volume(),
            perimeter: geometry.perimeter(),
        };

        tracing::debug!(shape = %shape.id(), ?record, "characteristics updated");
        self.characteristics.insert(shape.id().clone(), record);
    }

    /// 纯查找，无副作用
    pub fn characteristics(&self, id: &ShapeId) -> Option<ShapeCharacteristics> {
        self.characteristics.get(id).copied()
    }

    /// 整表快照副本
    pub fn all_characteristics(&self) -> HashMap<ShapeId, ShapeCharacteristics> {
        self.characteristics.clone()
    }

    /// 驱逐条目；不存在时为无操作
    pub fn remove_characteristics(&mut self, id: &ShapeId) -> bool {
        self.characteristics.remove(id).is_some()
    }

    /// 清空整个缓存
    pub fn clear(&mut self) {
        self.characteristics.clear();
    }

    pub fn len(&self) -> usize {
        self.characteristics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characteristics.is_empty()
    }
}

impl ShapeObserver for Warehouse {
    fn on_update(&mut self, shape: &Shape) -> Result<(), ObserverError> {
        self.update(shape);
        Ok(())
    }
}
