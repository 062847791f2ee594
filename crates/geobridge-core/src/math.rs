//! 基础数学类型
//!
//! 规范模型中的点、向量、四元数、坐标系和变换矩阵。
//! 所有类型都是纯数据记录，运算时借用 nalgebra 完成。

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// 浮点比较的默认容差
pub const EPSILON: f64 = 1e-10;

/// 三维点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// 到另一点的距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }
}

/// 三维向量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        Vector3::<f64>::from(*self).norm()
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector3::<f64>::from(*self).cross(&Vector3::<f64>::from(*other)).into()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

/// 四元数
///
/// 分量按位置存储，不约定哪一个是实部。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// 笛卡尔坐标系（右手系）
///
/// Z 轴由 X、Y 轴叉乘得到，不单独存储。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianFrame {
    pub origin: Point,
    pub axis_x: Vector,
    pub axis_y: Vector,
}

impl CartesianFrame {
    pub fn new(origin: Point, axis_x: Vector, axis_y: Vector) -> Self {
        Self {
            origin,
            axis_x,
            axis_y,
        }
    }

    /// 世界坐标系
    pub fn world() -> Self {
        Self::new(
            Point::origin(),
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        )
    }

    pub fn axis_z(&self) -> Vector {
        self.axis_x.cross(&self.axis_y)
    }

    /// 坐标系平面上极角 `angle` 处、距原点 `radius` 的点
    pub fn point_at_angle(&self, radius: f64, angle: f64) -> Point {
        self.origin + self.axis_x * (radius * angle.cos()) + self.axis_y * (radius * angle.sin())
    }
}

/// 4x4 变换矩阵（行主序）
///
/// 表示仿射变换。最后一行通常为 [0, 0, 0, 1]，但不做强制。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformMatrix {
    pub matrix: [[f64; 4]; 4],
}

/// 轴对齐包围盒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }
}
