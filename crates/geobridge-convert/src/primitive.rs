//! 基础类型映射
//!
//! 点、向量、平面、四元数、变换矩阵按分量直接复制：不做容差处理、不去重、不归一化。

use crate::kernel::types as k;
use geobridge_core::math::{BoundingBox, CartesianFrame, Point, Quaternion, TransformMatrix, Vector};

impl From<k::Point3d> for Point {
    fn from(p: k::Point3d) -> Self {
        Point::new(p.x, p.y, p.z)
    }
}

impl From<k::Point3f> for Point {
    fn from(p: k::Point3f) -> Self {
        Point::new(f64::from(p.x), f64::from(p.y), f64::from(p.z))
    }
}

impl From<&k::PointObject> for Point {
    fn from(p: &k::PointObject) -> Self {
        p.location.into()
    }
}

impl From<k::ControlPoint> for Point {
    fn from(p: k::ControlPoint) -> Self {
        p.location.into()
    }
}

impl From<k::BrepVertex> for Point {
    fn from(v: k::BrepVertex) -> Self {
        v.location.into()
    }
}

impl From<k::Vector3d> for Vector {
    fn from(v: k::Vector3d) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<k::Vector3f> for Vector {
    fn from(v: k::Vector3f) -> Self {
        Vector::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }
}

/// 平面只取原点和 X、Y 轴，Z 轴可由叉乘恢复
impl From<k::Plane> for CartesianFrame {
    fn from(plane: k::Plane) -> Self {
        CartesianFrame::new(plane.origin.into(), plane.x_axis.into(), plane.y_axis.into())
    }
}

/// 按位置映射：x = a, y = b, z = c, w = d
///
/// 内核的 `a` 是实部，这里不做重排，实部落在 `x` 上。
impl From<k::Quaternion> for Quaternion {
    fn from(q: k::Quaternion) -> Self {
        Quaternion {
            x: q.a,
            y: q.b,
            z: q.c,
            w: q.d,
        }
    }
}

impl From<k::Transform> for TransformMatrix {
    fn from(t: k::Transform) -> Self {
        TransformMatrix { matrix: t.m }
    }
}

impl From<k::BoundingBox> for BoundingBox {
    fn from(b: k::BoundingBox) -> Self {
        BoundingBox::new(b.min.into(), b.max.into())
    }
}

/// 有向长方体只保留其世界坐标包围盒
impl From<k::OrientedBox> for BoundingBox {
    fn from(shape: k::OrientedBox) -> Self {
        shape.bounding_box().into()
    }
}
