//! 几何内核接口
//!
//! 转换引擎只通过这里的 trait 访问外部 CAD 内核。所有判定与提取
//! 都在内核自己的容差下进行，引擎不持有容差。
//!
//! 每个方法对应内核的一次同步、无副作用调用。

pub mod types;

/// 内核曲线的原生类型
///
/// 曲线分类在谓词判断之后按此封闭枚举分派，`Other` 一律强制转换为 NURBS。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Arc,
    Polyline,
    Nurbs,
    /// 由多段曲线串接而成
    Poly,
    Other,
}

/// 内核曲线句柄
pub trait KernelCurve: Sized {
    fn kind(&self) -> CurveKind;

    fn is_linear(&self) -> bool;
    /// 节点区间数，单区间即无内部节点
    fn span_count(&self) -> usize;
    fn is_circle(&self) -> bool;
    fn is_arc(&self) -> bool;
    fn is_polyline(&self) -> bool;
    fn is_closed(&self) -> bool;
    fn is_ellipse(&self) -> bool;
    /// 仅对原生圆弧曲线有意义：是否为整圆
    fn is_complete_circle(&self) -> bool;

    fn point_at_start(&self) -> types::Point3d;
    fn point_at_end(&self) -> types::Point3d;

    fn try_get_circle(&self) -> Option<types::Circle>;
    fn try_get_arc(&self) -> Option<types::Arc>;
    fn try_get_polyline(&self) -> Option<types::Polyline>;
    fn try_get_ellipse(&self) -> Option<types::Ellipse>;

    /// 原生 NURBS 曲线的数据，其他类型返回 None
    fn nurbs_data(&self) -> Option<types::NurbsCurveData>;
    /// 强制转换为 NURBS 曲线
    fn to_nurbs(&self) -> Option<Self>;

    /// 去除多余的嵌套层级
    fn remove_nesting(&self) -> Self;
    /// 拆分为各段曲线
    fn explode(&self) -> Vec<Self>;
    /// 将首尾相接的曲线连接起来
    fn join(curves: &[Self]) -> Vec<Self>;
}

/// 内核曲面句柄
pub trait KernelSurface {
    /// 强制转换为 NURBS 曲面
    fn to_nurbs_surface(&self) -> Option<types::NurbsSurfaceData>;
    fn try_get_sphere(&self) -> Option<types::Sphere>;
    fn try_get_cone(&self) -> Option<types::Cone>;
    fn try_get_cylinder(&self) -> Option<types::Cylinder>;
}

/// 内核边界表示（壳体）句柄
pub trait KernelBrep {
    type Curve: KernelCurve;
    type Surface: KernelSurface;

    fn surfaces(&self) -> &[Self::Surface];
    /// 是否为封闭实体
    fn is_solid(&self) -> bool;
    /// 是否为单个平面面片
    fn is_planar_surface(&self) -> bool;
    /// 复制裸边曲线，`outer` / `inner` 分别选择外环与内环
    fn naked_edge_curves(&self, outer: bool, inner: bool) -> Vec<Self::Curve>;
}

/// 内核网格句柄
pub trait KernelMesh {
    fn vertices(&self) -> &[types::Point3f];
    fn faces(&self) -> &[types::MeshFace];
}

/// 内核的全部句柄类型
pub trait Kernel {
    type Curve: KernelCurve;
    type Surface: KernelSurface;
    type Brep: KernelBrep<Curve = Self::Curve, Surface = Self::Surface>;
    type Mesh: KernelMesh;
    /// 拉伸体，目前没有对应的规范类型
    type Extrusion;
}
