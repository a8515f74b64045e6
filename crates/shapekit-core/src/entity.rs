//! 图形实体与观察者机制
//!
//! `Shape` 持有身份（id、名称）、几何数据与观察者列表。任何设值
//! 方法在更新字段后、返回前同步按挂接顺序通知全部观察者。挂接与
//! 摘除通过稳定句柄操作，同一观察者允许重复挂接（各得一个句柄）。
//!
//! 通知是"发后即忘"的：单个观察者的失败只被记录，不会中断设值
//! 方法，也不影响其余观察者。

use crate::error::{CoreError, ObserverError};
use crate::geometry::{Geometry, Point, Sphere, Triangle};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// 图形ID（由调用方指定，生命周期内不变）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ShapeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 观察者句柄
///
/// `attach` 为每次挂接分配一个实体内单调递增的句柄，摘除按句柄
/// 进行，避免依赖对象指针身份。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// 图形状态变更的观察者
pub trait ShapeObserver {
    fn on_update(&mut self, shape: &Shape) -> Result<(), ObserverError>;
}

/// 共享观察者引用（单线程共享所有权）
pub type SharedObserver = Rc<RefCell<dyn ShapeObserver>>;

/// 共享图形引用
pub type SharedShape = Rc<RefCell<Shape>>;

/// 图形实体
///
/// id 与名称在构造时固定；几何数据经设值方法变更并触发通知。
/// 构造本身不通知——此刻不可能有已挂接的观察者，仓库在挂接后
/// 显式调用一次缓存更新来完成初始填充。
pub struct Shape {
    id: ShapeId,
    name: String,
    geometry: Geometry,
    observers: Vec<(ObserverHandle, SharedObserver)>,
    next_handle: u64,
}

impl Shape {
    pub fn new(id: impl Into<ShapeId>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry,
            observers: Vec::new(),
            next_handle: 0,
        }
    }

    /// 构造三角形实体
    pub fn triangle(
        id: impl Into<ShapeId>,
        name: impl Into<String>,
        point_a: Point,
        point_b: Point,
        point_c: Point,
    ) -> Self {
        Self::new(
            id,
            name,
            Geometry::Triangle(Triangle::new(point_a, point_b, point_c)),
        )
    }

    /// 构造球体实体
    pub fn sphere(
        id: impl Into<ShapeId>,
        name: impl Into<String>,
        center: Point,
        radius: f64,
    ) -> Self {
        Self::new(id, name, Geometry::Sphere(Sphere::new(center, radius)))
    }

    /// 包装为共享引用
    pub fn into_shared(self) -> SharedShape {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// 挂接观察者，返回稳定句柄（允许重复挂接）
    pub fn attach(&mut self, observer: SharedObserver) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, observer));
        handle
    }

    /// 按句柄摘除观察者；句柄不存在时为无操作
    pub fn detach(&mut self, handle: ObserverHandle) -> bool {
        match self.observers.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// 设置三角形顶点 A
    pub fn set_point_a(&mut self, point: Point) -> Result<(), CoreError> {
        if let Geometry::Triangle(t) = &mut self.geometry {
            t.point_a = point;
            self.notify_observers();
            Ok(())
        } else {
            Err(self.kind_mismatch("Triangle"))
        }
    }

    /// 设置三角形顶点 B
    pub fn set_point_b(&mut self, point: Point) -> Result<(), CoreError> {
        if let Geometry::Triangle(t) = &mut self.geometry {
            t.point_b = point;
            self.notify_observers();
            Ok(())
        } else {
            Err(self.kind_mismatch("Triangle"))
        }
    }

    /// 设置三角形顶点 C
    pub fn set_point_c(&mut self, point: Point) -> Result<(), CoreError> {
        if let Geometry::Triangle(t) = &mut self.geometry {
            t.point_c = point;
            self.notify_observers();
            Ok(())
        } else {
            Err(self.kind_mismatch("Triangle"))
        }
    }

    /// 设置球心
    pub fn set_center(&mut self, center: Point) -> Result<(), CoreError> {
        if let Geometry::Sphere(s) = &mut self.geometry {
            s.center = center;
            self.notify_observers();
            Ok(())
        } else {
            Err(self.kind_mismatch("Sphere"))
        }
    }

    /// 设置球体半径
    pub fn set_radius(&mut self, radius: f64) -> Result<(), CoreError> {
        if let Geometry::Sphere(s) = &mut self.geometry {
            s.radius = radius;
            self.notify_observers();
            Ok(())
        } else {
            Err(self.kind_mismatch("Sphere"))
        }
    }

    /// 按挂接顺序同步通知全部观察者
    ///
    /// 失败的观察者被跳过并记录，不影响后续观察者。
    fn notify_observers(&self) {
        for (handle, observer) in &self.observers {
            if let Err(err) = observer.borrow_mut().on_update(self) {
                tracing::warn!(
                    shape = %self.id,
                    handle = handle.0,
                    error = %err,
                    "observer update failed, skipping"
                );
            }
        }
    }

    fn kind_mismatch(&self, expected: &'static str) -> CoreError {
        CoreError::KindMismatch {
            id: self.id.to_string(),
            expected,
            actual: self.geometry.kind_name(),
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 记录收到的通知
    struct Recorder {
        seen: Vec<String>,
    }

    impl ShapeObserver for Recorder {
        fn on_update(&mut self, shape: &Shape) -> Result<(), ObserverError> {
            self.seen.push(shape.id().to_string());
            Ok(())
        }
    }

    /// 永远失败的观察者
    struct Faulty;

    impl ShapeObserver for Faulty {
        fn on_update(&mut self, _shape: &Shape) -> Result<(), ObserverError> {
            Err(ObserverError::new("faulty", "deliberate failure"))
        }
    }

    fn sample_sphere() -> Shape {
        Shape::sphere("s1", "Orb", Point::new(0.0, 0.0, 0.0), 5.0)
    }

    #[test]
    fn test_identity_is_fixed() {
        let shape = sample_sphere();
        assert_eq!(shape.id().as_str(), "s1");
        assert_eq!(shape.name(), "Orb");
        assert_eq!(shape.geometry().kind_name(), "Sphere");
    }

    #[test]
    fn test_attach_detach_by_handle() {
        let mut shape = sample_sphere();
        let recorder = Rc::new(RefCell::new(Recorder { seen: Vec::new() }));

        let h1 = shape.attach(recorder.clone());
        // 同一观察者重复挂接得到不同句柄
        let h2 = shape.attach(recorder.clone());
        assert_ne!(h1, h2);
        assert_eq!(shape.observer_count(), 2);

        assert!(shape.detach(h1));
        assert_eq!(shape.observer_count(), 1);
        // 再次摘除同一句柄为无操作
        assert!(!shape.detach(h1));
    }

    #[test]
    fn test_setter_notifies_each_attachment() {
        let mut shape = sample_sphere();
        let recorder = Rc::new(RefCell::new(Recorder { seen: Vec::new() }));
        shape.attach(recorder.clone());
        shape.attach(recorder.clone());

        shape.set_radius(10.0).unwrap();
        // 重复挂接的观察者收到两次通知
        assert_eq!(recorder.borrow().seen, vec!["s1", "s1"]);

        if let Geometry::Sphere(s) = shape.geometry() {
            assert_eq!(s.radius, 10.0);
        } else {
            panic!("expected sphere");
        }
    }

    #[test]
    fn test_failing_observer_is_isolated() {
        let mut shape = sample_sphere();
        let recorder = Rc::new(RefCell::new(Recorder { seen: Vec::new() }));
        shape.attach(Rc::new(RefCell::new(Faulty)));
        shape.attach(recorder.clone());

        // Faulty 失败不阻断后续观察者，也不让设值方法出错
        shape.set_radius(7.0).unwrap();
        assert_eq!(recorder.borrow().seen.len(), 1);
    }

    #[test]
    fn test_wrong_kind_setter_rejected_without_notify() {
        let mut shape = sample_sphere();
        let recorder = Rc::new(RefCell::new(Recorder { seen: Vec::new() }));
        shape.attach(recorder.clone());

        let err = shape.set_point_a(Point::new(1.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, CoreError::KindMismatch { .. }));
        assert!(recorder.borrow().seen.is_empty());
    }

    #[test]
    fn test_triangle_vertex_setters() {
        let mut shape = Shape::triangle(
            "t1",
            "Tri",
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, 4.0, 0.0),
        );
        shape.set_point_b(Point::new(6.0, 0.0, 0.0)).unwrap();

        if let Geometry::Triangle(t) = shape.geometry() {
            assert_eq!(t.point_b.x(), 6.0);
        } else {
            panic!("expected triangle");
        }
        assert!(shape.set_radius(1.0).is_err());
    }
}
