//! 网格转换
//!
//! 顶点按顺序逐个复制，面索引保持不变。内核的面非三角形即四边形，
//! 只有带负索引、无法作为顶点下标的面被丢弃。

use crate::converter::Converter;
use crate::error::Conversion;
use crate::kernel::types as k;
use crate::kernel::KernelMesh;
use geobridge_core::math::Point;
use geobridge_core::mesh::{Face, Mesh};

/// 单个网格面，含负索引时返回 None
pub fn mesh_face(face: &k::MeshFace) -> Option<Face> {
    let index = |i: i32| usize::try_from(i).ok();
    let (a, b, c) = (index(face.a)?, index(face.b)?, index(face.c)?);

    if face.is_quad() {
        Some(Face::quad(a, b, c, index(face.d)?))
    } else {
        Some(Face::triangle(a, b, c))
    }
}

impl Converter {
    /// 转换网格
    pub fn mesh<'a, M, H>(&self, mesh: H) -> Conversion<Mesh>
    where
        M: KernelMesh + 'a,
        H: Into<Option<&'a M>>,
    {
        Ok(mesh.into().map(|mesh| self.convert_mesh(mesh)))
    }

    pub(crate) fn convert_mesh<M: KernelMesh>(&self, mesh: &M) -> Mesh {
        let vertices = mesh.vertices().iter().map(|&v| Point::from(v)).collect();

        let source_faces = mesh.faces();
        let faces: Vec<Face> = source_faces
            .iter()
            .enumerate()
            .filter_map(|(i, face)| {
                let converted = mesh_face(face);
                if converted.is_none() {
                    tracing::debug!(index = i, ?face, "dropping mesh face with negative index");
                }
                converted
            })
            .collect();

        let dropped = source_faces.len() - faces.len();
        if dropped > 0 {
            tracing::warn!(dropped, total = source_faces.len(), "mesh faces dropped");
        }

        Mesh::new(vertices, faces)
    }
}
