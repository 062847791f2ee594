//! 实体识别
//!
//! 封闭壳体按面数尝试识别二次曲面实体：
//!
//! | 面数 | 尝试识别 |
//! |------|----------|
//! | 1    | 球       |
//! | 2    | 圆锥     |
//! | 3    | 圆柱     |
//!
//! 这只是对内核构造方式的经验规则（内核生成的球恰好是一个面，以此类推），
//! 不是几何判定。识别失败或其他面数时，输出由各面 NURBS 曲面组成的边界表示。
//! 对接其他内核时需要重新确认这条规则，或通过 `recognize_quadrics` 关闭。

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::kernel::types as k;
use crate::kernel::{KernelBrep, KernelSurface};
use geobridge_core::math::{Point, Vector};
use geobridge_core::solid::{BoundaryRepresentation, Cone, Cylinder, Solid, Sphere, Torus};
use geobridge_core::surface::Surface;

impl From<k::Sphere> for Sphere {
    fn from(sphere: k::Sphere) -> Self {
        Sphere {
            centre: sphere.center.into(),
            radius: sphere.radius,
        }
    }
}

impl From<k::Cone> for Cone {
    fn from(cone: k::Cone) -> Self {
        Cone {
            centre: cone.base_point.into(),
            axis: cone.axis.into(),
            radius: cone.radius,
            height: cone.height,
        }
    }
}

/// 内核的圆柱以轴上两个高度界定，圆心平移到起始高度处
impl From<k::Cylinder> for Cylinder {
    fn from(cylinder: k::Cylinder) -> Self {
        let axis = Vector::from(cylinder.axis);
        Cylinder {
            centre: Point::from(cylinder.center) + axis * cylinder.height1,
            axis,
            height: cylinder.total_height(),
            radius: cylinder.radius,
        }
    }
}

impl From<k::Torus> for Torus {
    fn from(torus: k::Torus) -> Self {
        Torus {
            centre: torus.plane.origin.into(),
            axis: torus.plane.z_axis.into(),
            radius_major: torus.major_radius,
            radius_minor: torus.minor_radius,
        }
    }
}

impl Converter {
    pub(crate) fn classify_solid<B: KernelBrep>(&self, brep: &B) -> Result<Solid, ConvertError> {
        let faces = brep.surfaces();

        if self.config.recognize_quadrics {
            if let Some(solid) = recognize_quadric(faces) {
                tracing::trace!(solid = solid.type_name(), "recognized quadric solid");
                return Ok(solid);
            }
        }

        tracing::debug!(faces = faces.len(), "falling back to boundary representation");
        let faces = faces
            .iter()
            .map(|face| self.nurbs_surface(face).map(Surface::Nurbs))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Solid::BoundaryRepresentation(BoundaryRepresentation::new(faces)))
    }
}

/// 识别只看第一个面
fn recognize_quadric<S: KernelSurface>(faces: &[S]) -> Option<Solid> {
    let first = faces.first()?;
    match faces.len() {
        1 => first.try_get_sphere().map(|s| Solid::Sphere(s.into())),
        2 => first.try_get_cone().map(|c| Solid::Cone(c.into())),
        3 => first.try_get_cylinder().map(|c| Solid::Cylinder(c.into())),
        _ => None,
    }
}
