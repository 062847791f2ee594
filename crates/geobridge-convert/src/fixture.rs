//! 测试用内存内核
//!
//! 每个谓词都是显式字段，测试可以单独打开或关闭，模拟内核在容差下的各种判定结果。

use crate::kernel::types as k;
use crate::kernel::{CurveKind, Kernel, KernelBrep, KernelCurve, KernelMesh, KernelSurface};
use std::f64::consts::PI;

pub(crate) fn pt(x: f64, y: f64, z: f64) -> k::Point3d {
    k::Point3d::new(x, y, z)
}

/// 曲线谓词
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Flags {
    pub linear: bool,
    pub circle: bool,
    pub arc: bool,
    pub polyline: bool,
    pub ellipse: bool,
    pub closed: bool,
    pub complete_circle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FixtureCurve {
    pub kind: CurveKind,
    pub flags: Flags,
    pub spans: usize,
    pub start: k::Point3d,
    pub end: k::Point3d,
    pub circle: Option<k::Circle>,
    pub arc: Option<k::Arc>,
    pub polyline: Option<k::Polyline>,
    pub ellipse: Option<k::Ellipse>,
    pub nurbs: Option<k::NurbsCurveData>,
    pub segments: Vec<FixtureCurve>,
}

impl FixtureCurve {
    fn base(kind: CurveKind, start: k::Point3d, end: k::Point3d) -> Self {
        Self {
            kind,
            flags: Flags::default(),
            spans: 1,
            start,
            end,
            circle: None,
            arc: None,
            polyline: None,
            ellipse: None,
            nurbs: None,
            segments: Vec::new(),
        }
    }

    pub fn line(from: k::Point3d, to: k::Point3d) -> Self {
        let mut curve = Self::base(CurveKind::Line, from, to);
        curve.flags.linear = true;
        curve.flags.polyline = true;
        curve.polyline = Some(k::Polyline::new(vec![from, to]));
        curve.nurbs = Some(k::NurbsCurveData {
            points: vec![k::ControlPoint::new(from, 1.0), k::ControlPoint::new(to, 1.0)],
            knots: vec![0.0, 1.0],
        });
        curve
    }

    pub fn arc(plane: k::Plane, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let at = |angle: f64| {
            pt(
                plane.origin.x + radius * angle.cos(),
                plane.origin.y + radius * angle.sin(),
                plane.origin.z,
            )
        };
        let mut curve = Self::base(CurveKind::Arc, at(start_angle), at(end_angle));
        curve.flags.arc = true;
        curve.arc = Some(k::Arc {
            plane,
            radius,
            start_angle,
            end_angle,
        });
        curve.nurbs = Some(sample_nurbs(curve.start, curve.end));
        curve
    }

    /// 原生圆弧类型表示的整圆
    pub fn circle(plane: k::Plane, radius: f64) -> Self {
        let mut curve = Self::arc(plane, radius, 0.0, 2.0 * PI);
        curve.flags.circle = true;
        curve.flags.closed = true;
        curve.flags.ellipse = true;
        curve.flags.complete_circle = true;
        curve.circle = Some(k::Circle { plane, radius });
        curve
    }

    pub fn polyline(points: Vec<k::Point3d>) -> Self {
        let start = points.first().copied().unwrap_or_default();
        let end = points.last().copied().unwrap_or_default();
        let mut curve = Self::base(CurveKind::Polyline, start, end);
        curve.spans = points.len().saturating_sub(1);
        curve.flags.polyline = true;
        curve.flags.linear = points.len() == 2;
        curve.flags.closed = points.len() > 2 && start == end;
        curve.polyline = Some(k::Polyline::new(points));
        curve
    }

    pub fn ellipse(plane: k::Plane, radius1: f64, radius2: f64) -> Self {
        let seam = pt(plane.origin.x + radius1, plane.origin.y, plane.origin.z);
        let mut curve = Self::base(CurveKind::Nurbs, seam, seam);
        curve.spans = 4;
        curve.flags.ellipse = true;
        curve.flags.closed = true;
        curve.ellipse = Some(k::Ellipse {
            plane,
            radius1,
            radius2,
        });
        curve.nurbs = Some(sample_nurbs(seam, seam));
        curve
    }

    pub fn nurbs(data: k::NurbsCurveData) -> Self {
        let start = data.points.first().map(|p| p.location).unwrap_or_default();
        let end = data.points.last().map(|p| p.location).unwrap_or_default();
        let mut curve = Self::base(CurveKind::Nurbs, start, end);
        curve.spans = data.points.len().saturating_sub(1).max(1);
        curve.flags.closed = start == end;
        curve.nurbs = Some(data);
        curve
    }

    /// 未知类型的曲线，只能通过强制转换得到 NURBS
    pub fn other(data: k::NurbsCurveData) -> Self {
        let mut curve = Self::nurbs(data);
        curve.kind = CurveKind::Other;
        curve
    }

    pub fn poly(segments: Vec<FixtureCurve>) -> Self {
        let start = segments.first().map(|s| s.start).unwrap_or_default();
        let end = segments.last().map(|s| s.end).unwrap_or_default();
        let mut curve = Self::base(CurveKind::Poly, start, end);
        curve.spans = segments.iter().map(|s| s.spans).sum();
        curve.flags.closed = segments.len() > 1 && start == end;

        let flat = flatten(&segments);
        let straight = flat
            .iter()
            .all(|s| s.polyline.is_some() && matches!(s.kind, CurveKind::Line | CurveKind::Polyline));
        if straight && !flat.is_empty() {
            let mut points: Vec<k::Point3d> = Vec::new();
            for segment in &flat {
                if let Some(pl) = &segment.polyline {
                    let skip = usize::from(points.last() == pl.points.first());
                    points.extend(pl.points.iter().skip(skip).copied());
                }
            }
            curve.flags.polyline = true;
            curve.polyline = Some(k::Polyline::new(points));
        }
        curve.nurbs = Some(sample_nurbs(start, end));
        curve.segments = segments;
        curve
    }

    pub fn with_kind(mut self, kind: CurveKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_flags(mut self, f: impl FnOnce(&mut Flags)) -> Self {
        f(&mut self.flags);
        self
    }
}

fn sample_nurbs(start: k::Point3d, end: k::Point3d) -> k::NurbsCurveData {
    let mid = pt(
        (start.x + end.x) / 2.0,
        (start.y + end.y) / 2.0 + 1.0,
        (start.z + end.z) / 2.0,
    );
    k::NurbsCurveData {
        points: vec![
            k::ControlPoint::new(start, 1.0),
            k::ControlPoint::new(mid, 0.5),
            k::ControlPoint::new(end, 1.0),
        ],
        knots: vec![0.0, 0.0, 1.0, 1.0],
    }
}

fn flatten(segments: &[FixtureCurve]) -> Vec<FixtureCurve> {
    segments
        .iter()
        .flat_map(|s| {
            if s.kind == CurveKind::Poly {
                flatten(&s.segments)
            } else {
                vec![s.clone()]
            }
        })
        .collect()
}

impl KernelCurve for FixtureCurve {
    fn kind(&self) -> CurveKind {
        self.kind
    }

    fn is_linear(&self) -> bool {
        self.flags.linear
    }

    fn span_count(&self) -> usize {
        self.spans
    }

    fn is_circle(&self) -> bool {
        self.flags.circle
    }

    fn is_arc(&self) -> bool {
        self.flags.arc
    }

    fn is_polyline(&self) -> bool {
        self.flags.polyline
    }

    fn is_closed(&self) -> bool {
        self.flags.closed
    }

    fn is_ellipse(&self) -> bool {
        self.flags.ellipse
    }

    fn is_complete_circle(&self) -> bool {
        self.flags.complete_circle
    }

    fn point_at_start(&self) -> k::Point3d {
        self.start
    }

    fn point_at_end(&self) -> k::Point3d {
        self.end
    }

    fn try_get_circle(&self) -> Option<k::Circle> {
        self.circle
    }

    fn try_get_arc(&self) -> Option<k::Arc> {
        self.arc
    }

    fn try_get_polyline(&self) -> Option<k::Polyline> {
        self.polyline.clone()
    }

    fn try_get_ellipse(&self) -> Option<k::Ellipse> {
        self.ellipse
    }

    fn nurbs_data(&self) -> Option<k::NurbsCurveData> {
        match self.kind {
            CurveKind::Nurbs => self.nurbs.clone(),
            _ => None,
        }
    }

    fn to_nurbs(&self) -> Option<Self> {
        self.nurbs.clone().map(FixtureCurve::nurbs)
    }

    fn remove_nesting(&self) -> Self {
        match self.kind {
            CurveKind::Poly => {
                let mut flat = self.clone();
                flat.segments = flatten(&self.segments);
                flat
            }
            _ => self.clone(),
        }
    }

    fn explode(&self) -> Vec<Self> {
        match self.kind {
            CurveKind::Poly => self.segments.clone(),
            _ => vec![self.clone()],
        }
    }

    /// 按首尾相接分组，每组连成一条曲线
    fn join(curves: &[Self]) -> Vec<Self> {
        let mut groups: Vec<Vec<FixtureCurve>> = Vec::new();
        for curve in curves {
            match groups.last_mut() {
                Some(group) if group.last().map(|c| c.end) == Some(curve.start) => {
                    group.push(curve.clone())
                }
                _ => groups.push(vec![curve.clone()]),
            }
        }
        groups
            .into_iter()
            .map(|mut group| {
                if group.len() == 1 {
                    group.remove(0)
                } else {
                    FixtureCurve::poly(group)
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FixtureSurface {
    pub nurbs: Option<k::NurbsSurfaceData>,
    pub sphere: Option<k::Sphere>,
    pub cone: Option<k::Cone>,
    pub cylinder: Option<k::Cylinder>,
}

impl FixtureSurface {
    /// 2x2 双线性面片
    pub fn patch(z: f64) -> Self {
        let corners = [pt(0.0, 0.0, z), pt(1.0, 0.0, z), pt(0.0, 1.0, z), pt(1.0, 1.0, z)];
        Self {
            nurbs: Some(k::NurbsSurfaceData {
                points: corners
                    .iter()
                    .map(|&p| k::ControlPoint::new(p, 1.0))
                    .collect(),
                count_u: 2,
                count_v: 2,
                knots_u: vec![0.0, 1.0],
                knots_v: vec![0.0, 1.0],
            }),
            ..Default::default()
        }
    }

    pub fn sphere(center: k::Point3d, radius: f64) -> Self {
        Self {
            sphere: Some(k::Sphere { center, radius }),
            ..Self::patch(0.0)
        }
    }

    pub fn cone(base_point: k::Point3d, radius: f64, height: f64) -> Self {
        Self {
            cone: Some(k::Cone {
                base_point,
                axis: k::Vector3d::new(0.0, 0.0, 1.0),
                radius,
                height,
            }),
            ..Self::patch(0.0)
        }
    }

    pub fn cylinder(center: k::Point3d, radius: f64, height1: f64, height2: f64) -> Self {
        Self {
            cylinder: Some(k::Cylinder {
                center,
                axis: k::Vector3d::new(0.0, 0.0, 1.0),
                height1,
                height2,
                radius,
            }),
            ..Self::patch(0.0)
        }
    }
}

impl KernelSurface for FixtureSurface {
    fn to_nurbs_surface(&self) -> Option<k::NurbsSurfaceData> {
        self.nurbs.clone()
    }

    fn try_get_sphere(&self) -> Option<k::Sphere> {
        self.sphere
    }

    fn try_get_cone(&self) -> Option<k::Cone> {
        self.cone
    }

    fn try_get_cylinder(&self) -> Option<k::Cylinder> {
        self.cylinder
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FixtureBrep {
    pub surfaces: Vec<FixtureSurface>,
    pub solid: bool,
    pub planar: bool,
    pub outer_edges: Vec<FixtureCurve>,
    pub inner_edges: Vec<FixtureCurve>,
}

impl FixtureBrep {
    pub fn solid(surfaces: Vec<FixtureSurface>) -> Self {
        Self {
            surfaces,
            solid: true,
            ..Default::default()
        }
    }

    pub fn open(surfaces: Vec<FixtureSurface>) -> Self {
        Self {
            surfaces,
            ..Default::default()
        }
    }

    /// 单个平面面片，边界为给定的裸边
    pub fn planar(outer_edges: Vec<FixtureCurve>, inner_edges: Vec<FixtureCurve>) -> Self {
        Self {
            surfaces: vec![FixtureSurface::patch(0.0)],
            planar: true,
            outer_edges,
            inner_edges,
            ..Default::default()
        }
    }
}

impl KernelBrep for FixtureBrep {
    type Curve = FixtureCurve;
    type Surface = FixtureSurface;

    fn surfaces(&self) -> &[FixtureSurface] {
        &self.surfaces
    }

    fn is_solid(&self) -> bool {
        self.solid
    }

    fn is_planar_surface(&self) -> bool {
        self.planar
    }

    fn naked_edge_curves(&self, outer: bool, inner: bool) -> Vec<FixtureCurve> {
        let mut edges = Vec::new();
        if outer {
            edges.extend(self.outer_edges.iter().cloned());
        }
        if inner {
            edges.extend(self.inner_edges.iter().cloned());
        }
        edges
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FixtureMesh {
    pub vertices: Vec<k::Point3f>,
    pub faces: Vec<k::MeshFace>,
}

impl KernelMesh for FixtureMesh {
    fn vertices(&self) -> &[k::Point3f] {
        &self.vertices
    }

    fn faces(&self) -> &[k::MeshFace] {
        &self.faces
    }
}

#[derive(Debug)]
pub(crate) struct FixtureExtrusion;

pub(crate) struct FixtureKernel;

impl Kernel for FixtureKernel {
    type Curve = FixtureCurve;
    type Surface = FixtureSurface;
    type Brep = FixtureBrep;
    type Mesh = FixtureMesh;
    type Extrusion = FixtureExtrusion;
}

/// 单位正方形的四条边（逆时针）
pub(crate) fn square_edges(offset: f64, size: f64) -> Vec<FixtureCurve> {
    let a = pt(offset, offset, 0.0);
    let b = pt(offset + size, offset, 0.0);
    let c = pt(offset + size, offset + size, 0.0);
    let d = pt(offset, offset + size, 0.0);
    vec![
        FixtureCurve::line(a, b),
        FixtureCurve::line(b, c),
        FixtureCurve::line(c, d),
        FixtureCurve::line(d, a),
    ]
}
