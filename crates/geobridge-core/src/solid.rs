//! 实体定义
//!
//! 二次曲面实体（球、圆锥、圆柱、圆环）用少量参数表达，
//! 无法识别的封闭体以边界表示 (B-Rep) 保存。

use crate::math::{Point, Vector};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// 实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    Sphere(Sphere),
    Cone(Cone),
    Cylinder(Cylinder),
    Torus(Torus),
    BoundaryRepresentation(BoundaryRepresentation),
}

impl Solid {
    pub fn type_name(&self) -> &'static str {
        match self {
            Solid::Sphere(_) => "Sphere",
            Solid::Cone(_) => "Cone",
            Solid::Cylinder(_) => "Cylinder",
            Solid::Torus(_) => "Torus",
            Solid::BoundaryRepresentation(_) => "BoundaryRepresentation",
        }
    }
}

/// 球
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub centre: Point,
    pub radius: f64,
}

/// 圆锥
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub centre: Point,
    pub axis: Vector,
    pub radius: f64,
    pub height: f64,
}

/// 圆柱
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// 底面圆心
    pub centre: Point,
    pub axis: Vector,
    pub height: f64,
    pub radius: f64,
}

/// 圆环
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub centre: Point,
    pub axis: Vector,
    pub radius_major: f64,
    pub radius_minor: f64,
}

/// 边界表示
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryRepresentation {
    pub faces: Vec<Surface>,
}

impl BoundaryRepresentation {
    pub fn new(faces: Vec<Surface>) -> Self {
        Self { faces }
    }
}
