//! 曲面定义

use crate::geometry::Curve;
use crate::math::Point;
use serde::{Deserialize, Serialize};

/// 曲面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    Nurbs(NurbsSurface),
    Planar(PlanarSurface),
    /// 开放壳体，由各面的 NURBS 曲面组成
    Poly(PolySurface),
}

impl Surface {
    pub fn type_name(&self) -> &'static str {
        match self {
            Surface::Nurbs(_) => "NurbsSurface",
            Surface::Planar(_) => "PlanarSurface",
            Surface::Poly(_) => "PolySurface",
        }
    }
}

/// NURBS 曲面
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NurbsSurface {
    /// 控制点网格，按行展开
    pub control_points: Vec<Point>,
    /// 权重，与控制点一一对应
    pub weights: Vec<f64>,
    pub knots_u: Vec<f64>,
    pub knots_v: Vec<f64>,
}

/// 有界平面区域
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarSurface {
    /// 外边界（闭合）
    pub external_boundary: Curve,
    /// 内边界（孔洞，各自闭合）
    pub internal_boundaries: Vec<Curve>,
}

/// 多曲面
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolySurface {
    pub surfaces: Vec<Surface>,
}
