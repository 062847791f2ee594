//! geobridge 规范几何模型
//!
//! 与具体 CAD 内核无关、可序列化的几何记录。
//!
//! # 架构设计
//!
//! 所有类型都是构造后不可变的值记录：
//! - `math`: 点、向量、四元数、坐标系、变换矩阵、包围盒
//! - `geometry`: 曲线及多态的 `Geometry` 枚举
//! - `surface` / `solid` / `mesh`: 曲面、实体、网格
//!
//! # 示例
//!
//! ```rust
//! use geobridge_core::prelude::*;
//!
//! let line = Line::new(Point::origin(), Point::new(3.0, 4.0, 0.0));
//! assert_eq!(line.length(), 5.0);
//! ```

pub mod geometry;
pub mod math;
pub mod mesh;
pub mod solid;
pub mod surface;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::geometry::{
        Arc, Circle, CompositeGeometry, Curve, Ellipse, Geometry, Line, NurbsCurve, PolyCurve,
        Polyline,
    };
    pub use crate::math::{BoundingBox, CartesianFrame, Point, Quaternion, TransformMatrix, Vector};
    pub use crate::mesh::{Face, Mesh};
    pub use crate::solid::{BoundaryRepresentation, Cone, Cylinder, Solid, Sphere, Torus};
    pub use crate::surface::{NurbsSurface, PlanarSurface, PolySurface, Surface};
}
