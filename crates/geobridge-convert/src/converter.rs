//! 转换入口
//!
//! [`Source`] 是所有可转换内核几何的封闭枚举，在边界处一次性确定类型，
//! 由 [`Converter::geometry`] 穷举匹配到对应的转换函数。

use crate::config::ConvertConfig;
use crate::error::{Conversion, ConvertError};
use crate::kernel::types as k;
use crate::kernel::Kernel;
use geobridge_core::prelude::*;
use rayon::prelude::*;

/// 内核几何
pub enum Source<'a, K: Kernel> {
    Point(k::Point3d),
    PointF(k::Point3f),
    PointObject(&'a k::PointObject),
    ControlPoint(k::ControlPoint),
    Vertex(k::BrepVertex),
    Vector(k::Vector3d),
    VectorF(k::Vector3f),
    Plane(k::Plane),
    Quaternion(k::Quaternion),
    Transform(k::Transform),
    BoundingBox(k::BoundingBox),
    Box(k::OrientedBox),

    Line(k::Line),
    Arc(k::Arc),
    Circle(k::Circle),
    Ellipse(k::Ellipse),
    Polyline(&'a k::Polyline),

    Sphere(k::Sphere),
    Cone(k::Cone),
    Cylinder(k::Cylinder),
    Torus(k::Torus),

    Curve(&'a K::Curve),
    Surface(&'a K::Surface),
    Brep(&'a K::Brep),
    Mesh(&'a K::Mesh),
    Extrusion(&'a K::Extrusion),
}

impl<K: Kernel> Source<'_, K> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Source::Point(_) => "point",
            Source::PointF(_) => "float point",
            Source::PointObject(_) => "point object",
            Source::ControlPoint(_) => "control point",
            Source::Vertex(_) => "brep vertex",
            Source::Vector(_) => "vector",
            Source::VectorF(_) => "float vector",
            Source::Plane(_) => "plane",
            Source::Quaternion(_) => "quaternion",
            Source::Transform(_) => "transform",
            Source::BoundingBox(_) => "bounding box",
            Source::Box(_) => "box",
            Source::Line(_) => "line",
            Source::Arc(_) => "arc",
            Source::Circle(_) => "circle",
            Source::Ellipse(_) => "ellipse",
            Source::Polyline(_) => "polyline",
            Source::Sphere(_) => "sphere",
            Source::Cone(_) => "cone",
            Source::Cylinder(_) => "cylinder",
            Source::Torus(_) => "torus",
            Source::Curve(_) => "curve",
            Source::Surface(_) => "surface",
            Source::Brep(_) => "brep",
            Source::Mesh(_) => "mesh",
            Source::Extrusion(_) => "extrusion",
        }
    }
}

/// 几何转换器
///
/// 不持有任何可变状态，可在多个线程间共享。
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub(crate) config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// 转换任意内核几何
    pub fn geometry<K: Kernel>(&self, source: &Source<'_, K>) -> Conversion<Geometry> {
        tracing::trace!(kind = source.kind_name(), "converting geometry");

        let geometry = match source {
            Source::Point(p) => Geometry::Point((*p).into()),
            Source::PointF(p) => Geometry::Point((*p).into()),
            Source::PointObject(p) => Geometry::Point((*p).into()),
            Source::ControlPoint(p) => Geometry::Point((*p).into()),
            Source::Vertex(v) => Geometry::Point((*v).into()),
            Source::Vector(v) => Geometry::Vector((*v).into()),
            Source::VectorF(v) => Geometry::Vector((*v).into()),
            Source::Plane(p) => Geometry::Frame((*p).into()),
            Source::Quaternion(q) => Geometry::Quaternion((*q).into()),
            Source::Transform(t) => Geometry::Transform((*t).into()),
            Source::BoundingBox(b) => Geometry::BoundingBox((*b).into()),
            Source::Box(b) => Geometry::BoundingBox((*b).into()),

            Source::Line(l) => Curve::Line((*l).into()).into(),
            Source::Arc(a) => Curve::Arc((*a).into()).into(),
            Source::Circle(c) => Curve::Circle((*c).into()).into(),
            Source::Ellipse(e) => Curve::Ellipse((*e).into()).into(),
            Source::Polyline(pl) => Curve::Polyline((*pl).into()).into(),

            Source::Sphere(s) => Solid::Sphere((*s).into()).into(),
            Source::Cone(c) => Solid::Cone((*c).into()).into(),
            Source::Cylinder(c) => Solid::Cylinder((*c).into()).into(),
            Source::Torus(t) => Solid::Torus((*t).into()).into(),

            Source::Curve(c) => return Ok(self.classify_curve(*c)?.map(Geometry::Curve)),
            Source::Surface(s) => return Ok(self.convert_surface(*s)?.map(Geometry::Surface)),
            Source::Brep(b) => return self.convert_brep(*b),
            Source::Mesh(m) => return Ok(Some(Geometry::Mesh(self.convert_mesh(*m)))),
            Source::Extrusion(_) => return Err(ConvertError::NotImplemented("extrusion")),
        };

        Ok(Some(geometry))
    }

    /// 转换异构集合
    ///
    /// 按顺序转换，空结果被跳过，遇到第一个错误即返回。
    /// 跳过之后元素下标不再与输入下标对应。
    pub fn composite<K: Kernel>(
        &self,
        sources: &[Source<'_, K>],
    ) -> Result<CompositeGeometry, ConvertError> {
        let elements = sources
            .iter()
            .map(|source| self.geometry(source))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompositeGeometry::new(elements))
    }

    /// 并行转换异构集合
    ///
    /// 与 [`Converter::composite`] 结果相同：保持输入顺序，空结果同样被跳过。
    pub fn composite_par<'a, K>(
        &self,
        sources: &[Source<'a, K>],
    ) -> Result<CompositeGeometry, ConvertError>
    where
        K: Kernel,
        Source<'a, K>: Sync,
    {
        let elements = sources
            .par_iter()
            .map(|source| self.geometry(source))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompositeGeometry::new(elements))
    }

    /// 点对象句柄可能为空
    pub fn point_object<'a, H>(&self, point: H) -> Option<Point>
    where
        H: Into<Option<&'a k::PointObject>>,
    {
        point.into().map(Point::from)
    }

    /// 拉伸体尚无对应的规范类型
    pub fn extrusion<'a, K, H>(&self, extrusion: H) -> Conversion<Geometry>
    where
        K: Kernel + 'a,
        H: Into<Option<&'a K::Extrusion>>,
    {
        match extrusion.into() {
            Some(_) => Err(ConvertError::NotImplemented("extrusion")),
            None => Ok(None),
        }
    }
}
