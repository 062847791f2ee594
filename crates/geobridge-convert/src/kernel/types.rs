//! 内核侧的值类型
//!
//! 内核按值交出的几何数据。字段命名沿用内核的习惯（`center`、`plane` 等），
//! 与规范模型区分开。

/// 双精度点
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// 单精度点（网格顶点）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 双精度向量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// 单精度向量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 文档中的点对象（可为空的句柄）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointObject {
    pub location: Point3d,
}

/// NURBS 控制点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub location: Point3d,
    pub weight: f64,
}

impl ControlPoint {
    pub fn new(location: Point3d, weight: f64) -> Self {
        Self { location, weight }
    }
}

/// B-Rep 顶点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrepVertex {
    pub location: Point3d,
}

/// 平面
///
/// 内核同时保存 Z 轴，规范坐标系只取原点和 X、Y 轴。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point3d,
    pub x_axis: Vector3d,
    pub y_axis: Vector3d,
    pub z_axis: Vector3d,
}

impl Plane {
    pub fn world_xy() -> Self {
        Self {
            origin: Point3d::default(),
            x_axis: Vector3d::new(1.0, 0.0, 0.0),
            y_axis: Vector3d::new(0.0, 1.0, 0.0),
            z_axis: Vector3d::new(0.0, 0.0, 1.0),
        }
    }

    pub fn with_origin(mut self, origin: Point3d) -> Self {
        self.origin = origin;
        self
    }
}

/// 四元数 a + bi + cj + dk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// 4x4 变换，`m[row][column]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m: [[f64; 4]; 4],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3d,
    pub max: Point3d,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point3d,
    pub to: Point3d,
}

/// 圆弧，角度为弧度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub plane: Plane,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// 圆，圆心为平面原点，法向为平面 Z 轴
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub plane: Plane,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub plane: Plane,
    pub radius1: f64,
    pub radius2: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point3d>,
}

impl Polyline {
    pub fn new(points: Vec<Point3d>) -> Self {
        Self { points }
    }
}

/// 内核 NURBS 曲线数据
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NurbsCurveData {
    pub points: Vec<ControlPoint>,
    pub knots: Vec<f64>,
}

/// 内核 NURBS 曲面数据
///
/// `points` 按 U 方向逐行存放，共 `count_u * count_v` 个。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NurbsSurfaceData {
    pub points: Vec<ControlPoint>,
    pub count_u: usize,
    pub count_v: usize,
    pub knots_u: Vec<f64>,
    pub knots_v: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3d,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub base_point: Point3d,
    pub axis: Vector3d,
    pub radius: f64,
    pub height: f64,
}

/// 圆柱
///
/// `center` 为基准平面原点，实际底面位于轴向 `height1` 处，
/// 顶面位于 `height2` 处。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Point3d,
    pub axis: Vector3d,
    pub height1: f64,
    pub height2: f64,
    pub radius: f64,
}

impl Cylinder {
    pub fn total_height(&self) -> f64 {
        self.height2 - self.height1
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub plane: Plane,
    pub major_radius: f64,
    pub minor_radius: f64,
}

/// 有向长方体
///
/// 由坐标系和三个轴向区间界定，区间按 `[起点, 终点]` 存储。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub plane: Plane,
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl OrientedBox {
    /// 世界坐标下的轴对齐包围盒，由八个角点求得
    pub fn bounding_box(&self) -> BoundingBox {
        let Plane {
            origin,
            x_axis,
            y_axis,
            z_axis,
        } = self.plane;

        let mut min = Point3d::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3d::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &u in &self.x {
            for &v in &self.y {
                for &w in &self.z {
                    let corner = Point3d::new(
                        origin.x + x_axis.x * u + y_axis.x * v + z_axis.x * w,
                        origin.y + x_axis.y * u + y_axis.y * v + z_axis.y * w,
                        origin.z + x_axis.z * u + y_axis.z * v + z_axis.z * w,
                    );
                    min = Point3d::new(min.x.min(corner.x), min.y.min(corner.y), min.z.min(corner.z));
                    max = Point3d::new(max.x.max(corner.x), max.y.max(corner.y), max.z.max(corner.z));
                }
            }
        }

        BoundingBox { min, max }
    }
}

/// 网格面
///
/// 内核约定：`c == d` 表示三角形，否则为四边形。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshFace {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
}

impl MeshFace {
    pub fn triangle(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c, d: c }
    }

    pub fn quad(a: i32, b: i32, c: i32, d: i32) -> Self {
        Self { a, b, c, d }
    }

    pub fn is_triangle(&self) -> bool {
        self.c == self.d
    }

    pub fn is_quad(&self) -> bool {
        self.c != self.d
    }
}
