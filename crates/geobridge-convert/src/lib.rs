//! geobridge 转换引擎
//!
//! 将外部 CAD 内核的几何分类并转换为 `geobridge-core` 的规范模型：
//! - 基础类型（点、向量、平面、四元数、变换）按分量直接复制
//! - 曲线按固定优先级识别为直线、圆、圆弧、多段线、椭圆、NURBS 或复合曲线
//! - 壳体识别为二次曲面实体、有界平面或多曲面
//! - 网格逐面复制
//!
//! 内核通过 [`kernel`] 中的 trait 接入。空输入得到 `Ok(None)`，
//! 无法表示的几何得到 [`ConvertError`]。
//!
//! 规范几何可通过 [`archive`] 编码为 JSON、MessagePack 或压缩归档。

pub mod archive;
pub mod config;
pub mod converter;
mod curve;
pub mod error;
pub mod kernel;
mod mesh;
mod primitive;
mod solid;
mod surface;

#[cfg(test)]
mod fixture;

pub use archive::ArchiveFormat;
pub use config::ConvertConfig;
pub use converter::{Converter, Source};
pub use error::{ArchiveError, Conversion, ConvertError};
pub use kernel::{CurveKind, Kernel, KernelBrep, KernelCurve, KernelMesh, KernelSurface};
pub use mesh::mesh_face;
