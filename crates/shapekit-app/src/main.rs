//! Shapekit 演示程序入口
//!
//! 演示仓库 + 特征缓存 + 规约查询的协作流程；可选地从文本文件
//! 加载三角形/球体数据。
//!
//! 用法: `shapekit [triangles.txt] [spheres.txt]`

use anyhow::Result;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use shapekit_core::prelude::*;
use shapekit_file::{parse_file, ShapeFactory, SphereFactory, TriangleFactory};

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting shapekit demo...");

    let warehouse = Warehouse::shared();
    let mut repository = ShapeRepository::new(warehouse.clone());

    populate_demo_shapes(&mut repository);
    show_cached_characteristics(&warehouse);
    demonstrate_observer(&repository, &warehouse)?;
    demonstrate_specifications(&repository);
    demonstrate_sorting(&repository);
    demonstrate_removal(&mut repository, &warehouse);

    // 从命令行传入的数据文件加载图形
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(path) = args.first() {
        load_triangles(&mut repository, path);
    }
    if let Some(path) = args.get(1) {
        load_spheres(&mut repository, path);
    }

    // 最终缓存快照
    let snapshot = warehouse.borrow().all_characteristics();
    info!(
        "Final warehouse snapshot:\n{}",
        serde_json::to_string_pretty(&snapshot)?
    );

    Ok(())
}

/// 构造演示图形集合
fn populate_demo_shapes(repository: &mut ShapeRepository) {
    info!("1. Adding shapes to repository");

    repository.add(
        Shape::sphere("s1", "SmallSphere", Point::new(1.0, 2.0, 3.0), 5.0).into_shared(),
    );
    repository.add(
        Shape::sphere("s2", "LargeSphere", Point::new(-5.0, -5.0, -5.0), 10.0).into_shared(),
    );
    repository.add(
        Shape::sphere("s3", "MediumSphere", Point::new(0.0, 0.0, 0.0), 7.0).into_shared(),
    );
    repository.add(
        Shape::triangle(
            "t1",
            "RightTriangle",
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, 4.0, 0.0),
        )
        .into_shared(),
    );
    repository.add(
        Shape::triangle(
            "t2",
            "EquilateralTriangle",
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 1.0, 1.0),
            Point::new(1.5, 1.866, 1.0),
        )
        .into_shared(),
    );

    info!("Added {} shapes", repository.len());
}

/// 展示加入时自动填充的缓存
fn show_cached_characteristics(warehouse: &SharedWarehouse) {
    info!("2. Warehouse stores characteristics automatically");

    if let Some(record) = warehouse.borrow().characteristics(&ShapeId::new("s1")) {
        info!(
            "SmallSphere - area: {:.2}, volume: {:.2}",
            record.area.unwrap_or_default(),
            record.volume.unwrap_or_default()
        );
    }
    if let Some(record) = warehouse.borrow().characteristics(&ShapeId::new("t1")) {
        info!(
            "RightTriangle - area: {:.2}, perimeter: {:.2}",
            record.area.unwrap_or_default(),
            record.perimeter.unwrap_or_default()
        );
    }
}

/// 展示观察者机制：变更触发缓存重算
fn demonstrate_observer(
    repository: &ShapeRepository,
    warehouse: &SharedWarehouse,
) -> Result<()> {
    info!("3. Observer pattern - mutation triggers recalculation");

    let id = ShapeId::new("s1");
    let before = warehouse
        .borrow()
        .characteristics(&id)
        .and_then(|c| c.volume);
    info!("Before: SmallSphere radius = 5, volume = {:?}", before);

    if let Some(sphere) = repository.find_by_id(&id) {
        sphere.borrow_mut().set_radius(10.0)?;
    }

    let after = warehouse
        .borrow()
        .characteristics(&id)
        .and_then(|c| c.volume);
    info!("After: SmallSphere radius = 10, volume = {:?}", after);
    Ok(())
}

/// 展示规约查询
fn demonstrate_specifications(repository: &ShapeRepository) {
    info!("4. Specification pattern - searching shapes");

    let by_name = repository.find_by_specification(&ShapeByNameSpecification::new("LargeSphere"));
    info!("By name 'LargeSphere': {} match(es)", by_name.len());

    let in_quadrant = repository.find_by_specification(&ShapeInFirstQuadrantSpecification);
    info!("In first quadrant: {} match(es)", in_quadrant.len());

    let near_origin =
        repository.find_by_specification(&ShapeByDistanceRangeSpecification::new(0.0, 5.0));
    info!("Within distance [0, 5] of origin: {} match(es)", near_origin.len());

    // 组合：第一卦限内且面积不超过 100，或者按ID命中 t1
    let composed = ShapeInFirstQuadrantSpecification
        .and(ShapeByAreaRangeSpecification::new(0.0, 100.0))
        .or(ShapeByIdSpecification::new("t1"));
    let matched = repository.find_by_specification(&composed);
    for shape in &matched {
        let shape = shape.borrow();
        info!("Composed spec matched: {} ({})", shape.name(), shape.id());
    }
}

/// 展示比较器排序
fn demonstrate_sorting(repository: &ShapeRepository) {
    info!("5. Comparator sorting");

    let by_name: Vec<String> = repository
        .sort(comparators::by_name)
        .iter()
        .map(|s| s.borrow().name().to_string())
        .collect();
    info!("Sorted by name: {:?}", by_name);

    let by_x: Vec<String> = repository
        .sort(comparators::by_first_point_x)
        .iter()
        .map(|s| s.borrow().id().to_string())
        .collect();
    info!("Sorted by first point x: {:?}", by_x);
}

/// 展示移除后的缓存驱逐
fn demonstrate_removal(repository: &mut ShapeRepository, warehouse: &SharedWarehouse) {
    info!("6. Removal evicts the cache entry");

    let id = ShapeId::new("s3");
    let removed = repository.remove(&id);
    let cached = warehouse.borrow().characteristics(&id);
    info!("Removed s3: {}, cache entry now: {:?}", removed, cached);
}

/// 从文本文件加载三角形（每行 9 个数值）
fn load_triangles(repository: &mut ShapeRepository, path: &str) {
    info!("Processing triangles file: {}", path);
    let factory = TriangleFactory;

    match parse_file(path) {
        Ok(rows) => {
            for (index, row) in rows.iter().enumerate() {
                let id = format!("triangle-{}", index + 1);
                let name = format!("Triangle {}", index + 1);
                match factory.create(&id, &name, row) {
                    Ok(shape) => repository.add(shape.into_shared()),
                    Err(err) => warn!("Skipped triangle {}: {}", index + 1, err),
                }
            }
        }
        Err(err) => warn!("Error processing triangles file: {}", err),
    }
}

/// 从文本文件加载球体（每行 4 个数值）
fn load_spheres(repository: &mut ShapeRepository, path: &str) {
    info!("Processing spheres file: {}", path);
    let factory = SphereFactory;

    match parse_file(path) {
        Ok(rows) => {
            for (index, row) in rows.iter().enumerate() {
                let id = format!("sphere-{}", index + 1);
                let name = format!("Sphere {}", index + 1);
                match factory.create(&id, &name, row) {
                    Ok(shape) => repository.add(shape.into_shared()),
                    Err(err) => warn!("Skipped sphere {}: {}", index + 1, err),
                }
            }
        }
        Err(err) => warn!("Error processing spheres file: {}", err),
    }
}
