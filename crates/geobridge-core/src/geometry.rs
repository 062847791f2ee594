//! 几何图元定义
//!
//! 规范曲线：
//! - 直线 (Line)
//! - 圆弧 (Arc)
//! - 圆 (Circle)
//! - 椭圆 (Ellipse)
//! - 多段线 (Polyline)
//! - NURBS 曲线 (NurbsCurve)
//! - 复合曲线 (PolyCurve)
//!
//! 以及包含所有规范类型的多态枚举 [`Geometry`]。

use crate::math::{BoundingBox, CartesianFrame, Point, Quaternion, TransformMatrix, Vector};
use crate::mesh::Mesh;
use crate::solid::Solid;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// 几何类型枚举
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    Vector(Vector),
    Frame(CartesianFrame),
    Quaternion(Quaternion),
    Transform(TransformMatrix),
    BoundingBox(BoundingBox),
    Curve(Curve),
    Surface(Surface),
    Solid(Solid),
    Mesh(Mesh),
    Composite(CompositeGeometry),
}

impl Geometry {
    /// 获取几何的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Vector(_) => "Vector",
            Geometry::Frame(_) => "CartesianFrame",
            Geometry::Quaternion(_) => "Quaternion",
            Geometry::Transform(_) => "TransformMatrix",
            Geometry::BoundingBox(_) => "BoundingBox",
            Geometry::Curve(c) => c.type_name(),
            Geometry::Surface(s) => s.type_name(),
            Geometry::Solid(s) => s.type_name(),
            Geometry::Mesh(_) => "Mesh",
            Geometry::Composite(_) => "CompositeGeometry",
        }
    }
}

impl From<Curve> for Geometry {
    fn from(curve: Curve) -> Self {
        Geometry::Curve(curve)
    }
}

impl From<Surface> for Geometry {
    fn from(surface: Surface) -> Self {
        Geometry::Surface(surface)
    }
}

impl From<Solid> for Geometry {
    fn from(solid: Solid) -> Self {
        Geometry::Solid(solid)
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

/// 异构几何集合
///
/// 转换时没有结果的源几何不占位置，元素下标不一定对应源集合的下标。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeGeometry {
    pub elements: Vec<Geometry>,
}

impl CompositeGeometry {
    pub fn new(elements: Vec<Geometry>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// 曲线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Nurbs(NurbsCurve),
    Poly(PolyCurve),
}

impl Curve {
    pub fn type_name(&self) -> &'static str {
        match self {
            Curve::Line(_) => "Line",
            Curve::Arc(_) => "Arc",
            Curve::Circle(_) => "Circle",
            Curve::Ellipse(_) => "Ellipse",
            Curve::Polyline(_) => "Polyline",
            Curve::Nurbs(_) => "NurbsCurve",
            Curve::Poly(_) => "PolyCurve",
        }
    }

    /// 起点
    ///
    /// 圆不记录接缝位置，因此没有起点。
    pub fn start_point(&self) -> Option<Point> {
        match self {
            Curve::Line(l) => Some(l.start),
            Curve::Arc(a) => Some(a.start_point()),
            Curve::Circle(_) => None,
            Curve::Ellipse(e) => Some(e.seam_point()),
            Curve::Polyline(pl) => pl.control_points.first().copied(),
            Curve::Nurbs(n) => n.control_points.first().copied(),
            Curve::Poly(pc) => pc.segments.first().and_then(Curve::start_point),
        }
    }

    /// 终点
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Curve::Line(l) => Some(l.end),
            Curve::Arc(a) => Some(a.end_point()),
            Curve::Circle(_) => None,
            Curve::Ellipse(e) => Some(e.seam_point()),
            Curve::Polyline(pl) => pl.control_points.last().copied(),
            Curve::Nurbs(n) => n.control_points.last().copied(),
            Curve::Poly(pc) => pc.segments.last().and_then(Curve::end_point),
        }
    }
}

/// 直线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    /// 是否为无限长直线
    pub infinite: bool,
}

impl Line {
    /// 有限长线段
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            infinite: false,
        }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// 圆弧
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// 圆弧所在坐标系，原点为圆心
    pub frame: CartesianFrame,
    /// 起始角度（弧度）
    pub start_angle: f64,
    /// 终止角度（弧度）
    pub end_angle: f64,
    pub radius: f64,
}

impl Arc {
    pub fn start_point(&self) -> Point {
        self.frame.point_at_angle(self.radius, self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.frame.point_at_angle(self.radius, self.end_angle)
    }
}

/// 圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub centre: Point,
    pub normal: Vector,
    pub radius: f64,
}

/// 椭圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub centre: Point,
    pub axis1: Vector,
    pub axis2: Vector,
    pub radius1: f64,
    pub radius2: f64,
}

impl Ellipse {
    /// 参数 0 处的点（主轴端点）
    fn seam_point(&self) -> Point {
        let len = self.axis1.length();
        if len == 0.0 {
            return self.centre;
        }
        self.centre + self.axis1 * (self.radius1 / len)
    }
}

/// 多段线
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub control_points: Vec<Point>,
}

impl Polyline {
    pub fn new(control_points: Vec<Point>) -> Self {
        Self { control_points }
    }

    /// 首尾点重合即视为闭合
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.control_points.first(), self.control_points.last()) {
            (Some(first), Some(last)) if self.control_points.len() > 2 => {
                first.distance_to(last) <= tolerance
            }
            _ => false,
        }
    }

    /// 计算总长度
    pub fn length(&self) -> f64 {
        self.control_points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }
}

/// NURBS 曲线
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NurbsCurve {
    pub control_points: Vec<Point>,
    /// 权重，与控制点一一对应
    pub weights: Vec<f64>,
    /// 节点向量（非递减）
    pub knots: Vec<f64>,
}

impl NurbsCurve {
    /// 控制点与权重数量一致且节点非递减
    pub fn is_well_formed(&self) -> bool {
        self.control_points.len() == self.weights.len()
            && self.knots.windows(2).all(|w| w[0] <= w[1])
    }
}

/// 复合曲线
///
/// 相邻分段首尾相接，且任何分段本身都不是复合曲线。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolyCurve {
    pub segments: Vec<Curve>,
}

impl PolyCurve {
    /// 创建复合曲线，嵌套的复合曲线会被展开
    pub fn new(segments: impl IntoIterator<Item = Curve>) -> Self {
        let mut flat = Vec::new();
        for segment in segments {
            match segment {
                Curve::Poly(inner) => flat.extend(PolyCurve::new(inner.segments).segments),
                other => flat.push(other),
            }
        }
        Self { segments: flat }
    }

    /// 检查是否没有嵌套
    pub fn is_flat(&self) -> bool {
        !self.segments.iter().any(|s| matches!(s, Curve::Poly(_)))
    }

    /// 检查相邻分段是否在容差内首尾相接
    ///
    /// 没有端点信息的分段（圆）不参与比较。
    pub fn is_contiguous(&self, tolerance: f64) -> bool {
        self.segments.windows(2).all(|w| {
            match (w[0].end_point(), w[1].start_point()) {
                (Some(end), Some(start)) => end.distance_to(&start) <= tolerance,
                _ => true,
            }
        })
    }
}
