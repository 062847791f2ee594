//! 曲面与壳体转换
//!
//! 任意参数曲面都先由内核强制转换为 NURBS，再逐字段复制。壳体在曲面转换之前先分类：
//! 封闭实体交给实体识别，单个平面面片输出有界平面区域，其余输出开放多曲面。

use crate::converter::Converter;
use crate::error::{Conversion, ConvertError};
use crate::kernel::types as k;
use crate::kernel::{KernelBrep, KernelCurve, KernelSurface};
use geobridge_core::geometry::{Curve, Geometry};
use geobridge_core::math::Point;
use geobridge_core::surface::{NurbsSurface, PlanarSurface, PolySurface, Surface};

/// 控制点网格按内核给出的顺序展开，权重与之并行
impl From<k::NurbsSurfaceData> for NurbsSurface {
    fn from(nurbs: k::NurbsSurfaceData) -> Self {
        NurbsSurface {
            control_points: nurbs.points.iter().map(|&p| Point::from(p)).collect(),
            weights: nurbs.points.iter().map(|p| p.weight).collect(),
            knots_u: nurbs.knots_u,
            knots_v: nurbs.knots_v,
        }
    }
}

impl Converter {
    /// 转换任意曲面为 NURBS 曲面
    pub fn surface<'a, S, H>(&self, surface: H) -> Conversion<Surface>
    where
        S: KernelSurface + 'a,
        H: Into<Option<&'a S>>,
    {
        match surface.into() {
            Some(surface) => self.convert_surface(surface),
            None => Ok(None),
        }
    }

    /// 转换壳体
    ///
    /// 结果可能是实体（`Geometry::Solid`）或曲面（`Geometry::Surface`），没有面的壳体返回 None。
    pub fn brep<'a, B, H>(&self, brep: H) -> Conversion<Geometry>
    where
        B: KernelBrep + 'a,
        H: Into<Option<&'a B>>,
    {
        match brep.into() {
            Some(brep) => self.convert_brep(brep),
            None => Ok(None),
        }
    }

    pub(crate) fn convert_surface<S: KernelSurface>(&self, surface: &S) -> Conversion<Surface> {
        self.nurbs_surface(surface).map(|s| Some(Surface::Nurbs(s)))
    }

    pub(crate) fn nurbs_surface<S: KernelSurface>(
        &self,
        surface: &S,
    ) -> Result<NurbsSurface, ConvertError> {
        surface
            .to_nurbs_surface()
            .map(NurbsSurface::from)
            .ok_or_else(|| ConvertError::unrepresentable("surface", "kernel cannot convert it to NURBS"))
    }

    pub(crate) fn convert_brep<B: KernelBrep>(&self, brep: &B) -> Conversion<Geometry> {
        let faces = brep.surfaces();
        if faces.is_empty() {
            tracing::debug!("brep has no faces, skipped");
            return Ok(None);
        }

        if brep.is_solid() {
            return self.classify_solid(brep).map(|solid| Some(Geometry::Solid(solid)));
        }

        if self.config.recognize_planar_surfaces && brep.is_planar_surface() {
            tracing::trace!("classified as planar surface");
            return self
                .planar_surface(brep)
                .map(|planar| Some(Geometry::Surface(Surface::Planar(planar))));
        }

        tracing::trace!(faces = faces.len(), "classified as open poly surface");
        let surfaces = faces
            .iter()
            .map(|face| self.nurbs_surface(face).map(Surface::Nurbs))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Geometry::Surface(Surface::Poly(PolySurface { surfaces }))))
    }

    /// 由内核连接裸边得到外环和各个内环
    fn planar_surface<B: KernelBrep>(&self, brep: &B) -> Result<PlanarSurface, ConvertError> {
        let outer = <B::Curve as KernelCurve>::join(&brep.naked_edge_curves(true, false));
        let external_boundary = match outer.first() {
            Some(loop_curve) => {
                self.required_curve(loop_curve, "planar surface", "outer boundary converts to nothing")?
            }
            None => {
                return Err(ConvertError::unrepresentable(
                    "planar surface",
                    "outer boundary cannot be joined",
                ))
            }
        };

        let inner = <B::Curve as KernelCurve>::join(&brep.naked_edge_curves(false, true));
        let internal_boundaries = inner
            .iter()
            .map(|hole| self.required_curve(hole, "planar surface", "a hole converts to nothing"))
            .collect::<Result<Vec<Curve>, _>>()?;

        Ok(PlanarSurface {
            external_boundary,
            internal_boundaries,
        })
    }
}
