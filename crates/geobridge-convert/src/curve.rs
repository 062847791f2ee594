//! 曲线分类与转换
//!
//! 通用曲线按以下优先级判定，先命中者生效，之后的谓词不再检查：
//!
//! 1. 直线且只有一个节点区间 → `Line`
//! 2. 圆 → `Circle`
//! 3. 圆弧（或原生圆弧类型） → `Arc`
//! 4. 多段线（或原生多段线类型） → `Polyline`
//! 5. 闭合且为椭圆 → `Ellipse`
//! 6. 原生 NURBS → `NurbsCurve`
//! 7. 原生复合曲线 → 去嵌套后再判断多段线，否则逐段递归得到 `PolyCurve`
//! 8. 其他 → 由内核强制转换为 NURBS
//!
//! 谓词只是内核在其容差下的判断，判定顺序本身决定了优先级。

use crate::converter::Converter;
use crate::error::{Conversion, ConvertError};
use crate::kernel::types as k;
use crate::kernel::{CurveKind, KernelCurve};
use geobridge_core::geometry::{Arc, Circle, Curve, Ellipse, Line, NurbsCurve, PolyCurve, Polyline};
use geobridge_core::math::Point;

impl From<k::Line> for Line {
    fn from(line: k::Line) -> Self {
        Line::new(line.from.into(), line.to.into())
    }
}

impl From<k::Arc> for Arc {
    fn from(arc: k::Arc) -> Self {
        Arc {
            frame: arc.plane.into(),
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
            radius: arc.radius,
        }
    }
}

impl From<k::Circle> for Circle {
    fn from(circle: k::Circle) -> Self {
        Circle {
            centre: circle.plane.origin.into(),
            normal: circle.plane.z_axis.into(),
            radius: circle.radius,
        }
    }
}

impl From<k::Ellipse> for Ellipse {
    fn from(ellipse: k::Ellipse) -> Self {
        Ellipse {
            centre: ellipse.plane.origin.into(),
            axis1: ellipse.plane.x_axis.into(),
            axis2: ellipse.plane.y_axis.into(),
            radius1: ellipse.radius1,
            radius2: ellipse.radius2,
        }
    }
}

impl From<&k::Polyline> for Polyline {
    fn from(polyline: &k::Polyline) -> Self {
        Polyline::new(polyline.points.iter().map(|&p| Point::from(p)).collect())
    }
}

impl From<k::Polyline> for Polyline {
    fn from(polyline: k::Polyline) -> Self {
        Polyline::from(&polyline)
    }
}

impl From<k::NurbsCurveData> for NurbsCurve {
    fn from(nurbs: k::NurbsCurveData) -> Self {
        NurbsCurve {
            control_points: nurbs.points.iter().map(|&p| Point::from(p)).collect(),
            weights: nurbs.points.iter().map(|p| p.weight).collect(),
            knots: nurbs.knots,
        }
    }
}

impl Converter {
    /// 转换任意曲线
    pub fn curve<'a, C, H>(&self, curve: H) -> Conversion<Curve>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        match curve.into() {
            Some(curve) => self.classify_curve(curve),
            None => Ok(None),
        }
    }

    /// 原生直线曲线
    pub fn line_curve<'a, C, H>(&self, curve: H) -> Conversion<Line>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        Ok(curve.into().map(line_between_ends))
    }

    /// 原生圆弧曲线：整圆输出 `Circle`，否则输出 `Arc`
    pub fn arc_curve<'a, C, H>(&self, curve: H) -> Conversion<Curve>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        let Some(curve) = curve.into() else {
            return Ok(None);
        };

        if curve.is_complete_circle() {
            circle_of(curve).map(Some)
        } else {
            arc_of(curve).map(Some)
        }
    }

    /// 原生多段线曲线
    ///
    /// 内核无法无损取回多段线时返回 None，这是已定义的退化情况而不是错误。
    pub fn polyline_curve<'a, C, H>(&self, curve: H) -> Conversion<Polyline>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        let Some(curve) = curve.into() else {
            return Ok(None);
        };

        if !curve.is_polyline() {
            tracing::debug!("polyline curve is not polyline-shaped, skipped");
            return Ok(None);
        }
        Ok(curve.try_get_polyline().map(Polyline::from))
    }

    /// 原生 NURBS 曲线
    pub fn nurbs_curve<'a, C, H>(&self, curve: H) -> Conversion<Curve>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        match curve.into() {
            Some(curve) => self.convert_nurbs_curve(curve),
            None => Ok(None),
        }
    }

    /// 原生复合曲线
    pub fn poly_curve<'a, C, H>(&self, curve: H) -> Conversion<Curve>
    where
        C: KernelCurve + 'a,
        H: Into<Option<&'a C>>,
    {
        match curve.into() {
            Some(curve) => self.convert_poly_curve(curve),
            None => Ok(None),
        }
    }

    pub(crate) fn classify_curve<C: KernelCurve>(&self, curve: &C) -> Conversion<Curve> {
        let kind = curve.kind();

        if curve.is_linear() && curve.span_count() < 2 {
            tracing::trace!(?kind, "classified as line");
            return Ok(Some(Curve::Line(line_between_ends(curve))));
        }
        if curve.is_circle() {
            tracing::trace!(?kind, "classified as circle");
            return circle_of(curve).map(Some);
        }
        if curve.is_arc() || kind == CurveKind::Arc {
            tracing::trace!(?kind, "classified as arc");
            return arc_of(curve).map(Some);
        }
        if curve.is_polyline() || kind == CurveKind::Polyline {
            tracing::trace!(?kind, "classified as polyline");
            return Ok(curve
                .try_get_polyline()
                .map(|pl| Curve::Polyline(pl.into())));
        }
        if curve.is_closed() && curve.is_ellipse() {
            tracing::trace!(?kind, "classified as ellipse");
            return ellipse_of(curve).map(Some);
        }

        match kind {
            CurveKind::Nurbs => self.convert_nurbs_curve(curve),
            CurveKind::Poly => self.convert_poly_curve(curve),
            CurveKind::Line | CurveKind::Arc | CurveKind::Polyline | CurveKind::Other => {
                tracing::trace!(?kind, "forcing NURBS conversion");
                let nurbs = curve.to_nurbs().ok_or_else(|| {
                    ConvertError::unrepresentable("curve", "kernel cannot convert it to NURBS")
                })?;
                self.convert_nurbs_curve(&nurbs)
            }
        }
    }

    /// 组成部分必须完整转换，否则整体失败
    pub(crate) fn required_curve<C: KernelCurve>(
        &self,
        curve: &C,
        kind: &'static str,
        reason: &'static str,
    ) -> Result<Curve, ConvertError> {
        self.classify_curve(curve)?
            .ok_or_else(|| ConvertError::unrepresentable(kind, reason))
    }

    fn convert_nurbs_curve<C: KernelCurve>(&self, curve: &C) -> Conversion<Curve> {
        if curve.is_polyline() {
            return Ok(curve
                .try_get_polyline()
                .map(|pl| Curve::Polyline(pl.into())));
        }
        if curve.is_closed() && curve.is_ellipse() {
            return ellipse_of(curve).map(Some);
        }

        let nurbs = curve.nurbs_data().ok_or_else(|| {
            ConvertError::unrepresentable("NURBS curve", "no control point data")
        })?;
        Ok(Some(Curve::Nurbs(nurbs.into())))
    }

    fn convert_poly_curve<C: KernelCurve>(&self, curve: &C) -> Conversion<Curve> {
        let curve = curve.remove_nesting();

        // 全部由直线段组成的复合曲线就是多段线
        if curve.is_polyline() {
            return Ok(curve
                .try_get_polyline()
                .map(|pl| Curve::Polyline(pl.into())));
        }

        let segments = curve
            .explode()
            .iter()
            .map(|segment| self.required_curve(segment, "poly curve", "a segment converts to nothing"))
            .collect::<Result<Vec<_>, _>>()?;

        let poly = PolyCurve::new(segments);
        if !poly.is_contiguous(self.config.joint_tolerance) {
            tracing::warn!(
                segments = poly.segments.len(),
                tolerance = self.config.joint_tolerance,
                "poly curve segments are not contiguous"
            );
        }

        Ok(Some(Curve::Poly(poly)))
    }
}

fn line_between_ends<C: KernelCurve>(curve: &C) -> Line {
    Line::new(curve.point_at_start().into(), curve.point_at_end().into())
}

fn circle_of<C: KernelCurve>(curve: &C) -> Result<Curve, ConvertError> {
    curve
        .try_get_circle()
        .map(|c| Curve::Circle(c.into()))
        .ok_or_else(|| ConvertError::unrepresentable("circle", "circle parameters unavailable"))
}

fn arc_of<C: KernelCurve>(curve: &C) -> Result<Curve, ConvertError> {
    curve
        .try_get_arc()
        .map(|a| Curve::Arc(a.into()))
        .ok_or_else(|| ConvertError::unrepresentable("arc", "arc parameters unavailable"))
}

fn ellipse_of<C: KernelCurve>(curve: &C) -> Result<Curve, ConvertError> {
    curve
        .try_get_ellipse()
        .map(|e| Curve::Ellipse(e.into()))
        .ok_or_else(|| ConvertError::unrepresentable("ellipse", "ellipse parameters unavailable"))
}
