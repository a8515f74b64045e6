//! 图形仓库
//!
//! 持有权威的图形集合（id → 图形），并负责图形与特征缓存之间的
//! 全部接线：加入时把缓存挂接为观察者并立即播种一次，移除时摘除
//! 观察者并驱逐缓存条目。查询与排序直接作用于活动集合的快照。
//!
//! 只有仓库负责这条接线——从未加入仓库的图形不被追踪、不进缓存，
//! 手动挂接/更新仍然可行。

use crate::comparators;
use crate::entity::{ObserverHandle, Shape, ShapeId, SharedShape};
use crate::specification::Specification;
use crate::warehouse::SharedWarehouse;
use std::cmp::Ordering;
use std::collections::HashMap;

/// 被追踪的图形：共享引用 + 缓存观察者句柄
#[derive(Debug)]
struct TrackedShape {
    shape: SharedShape,
    warehouse_handle: ObserverHandle,
}

/// 图形仓库
#[derive(Debug)]
pub struct ShapeRepository {
    shapes: HashMap<ShapeId, TrackedShape>,
    warehouse: SharedWarehouse,
}

impl ShapeRepository {
    pub fn new(warehouse: SharedWarehouse) -> Self {
        Self {
            shapes: HashMap::new(),
            warehouse,
        }
    }

    /// 加入图形：挂接缓存观察者并立即播种特征记录
    ///
    /// 重复ID按"清理后替换"处理：先摘除旧图形的缓存观察者句柄，
    /// 旧图形从此不再驱动缓存，再接入新图形。
    pub fn add(&mut self, shape: SharedShape) {
        let id = shape.borrow().id().clone();

        if let Some(previous) = self.shapes.remove(&id) {
            previous
                .shape
                .borrow_mut()
                .detach(previous.warehouse_handle);
            tracing::warn!(shape = %id, "id re-added, replacing previously tracked shape");
        }

        let warehouse_handle = shape.borrow_mut().attach(self.warehouse.clone());
        // 构造不自发通知，这里显式播种一次
        self.warehouse.borrow_mut().update(&shape.borrow());

        tracing::debug!(shape = %id, "shape tracked");
        self.shapes.insert(
            id,
            TrackedShape {
                shape,
                warehouse_handle,
            },
        );
    }

    /// 移除图形：摘除观察者、驱逐缓存条目、从集合删除
    pub fn remove(&mut self, id: &ShapeId) -> bool {
        match self.shapes.remove(id) {
            Some(tracked) => {
                tracked.shape.borrow_mut().detach(tracked.warehouse_handle);
                self.warehouse.borrow_mut().remove_characteristics(id);
                tracing::debug!(shape = %id, "shape removed");
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: &ShapeId) -> Option<SharedShape> {
        self.shapes.get(id).map(|tracked| tracked.shape.clone())
    }

    /// 活动集合的全新快照列表
    pub fn find_all(&self) -> Vec<SharedShape> {
        self.shapes
            .values()
            .map(|tracked| tracked.shape.clone())
            .collect()
    }

    /// 按规约过滤
    pub fn find_by_specification<S: Specification>(&self, specification: &S) -> Vec<SharedShape> {
        self.find_all()
            .into_iter()
            .filter(|shape| specification.is_satisfied_by(&shape.borrow()))
            .collect()
    }

    /// 按比较器返回排序后的新列表；存储顺序不变
    pub fn sort(&self, comparator: impl Fn(&Shape, &Shape) -> Ordering) -> Vec<SharedShape> {
        let mut shapes = self.find_all();
        shapes.sort_by(|a, b| comparator(&a.borrow(), &b.borrow()));
        shapes
    }

    /// 按ID排序的便捷方法
    pub fn sort_by_id(&self) -> Vec<SharedShape> {
        self.sort(comparators::by_id)
    }

    /// 清空：摘除所有缓存观察者、清空缓存、清空集合
    pub fn clear(&mut self) {
        for tracked in self.shapes.values() {
            tracked.shape.borrow_mut().detach(tracked.warehouse_handle);
        }
        self.shapes.clear();
        self.warehouse.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
