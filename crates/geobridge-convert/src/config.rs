//! 转换配置

use serde::{Deserialize, Serialize};

/// 转换参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// 按面数识别球、圆锥、圆柱
    ///
    /// 面数规则取决于内核构造这些实体的方式（球是一个面、圆锥两个、圆柱三个），
    /// 并非几何判定。换用其他内核时应重新确认或关闭。
    pub recognize_quadrics: bool,

    /// 单个平面面片输出为有界平面区域
    pub recognize_planar_surfaces: bool,

    /// 复合曲线分段间隙的诊断容差，仅用于日志
    pub joint_tolerance: f64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            recognize_quadrics: true,
            recognize_planar_surfaces: true,
            joint_tolerance: 1e-6,
        }
    }
}
