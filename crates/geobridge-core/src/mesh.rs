//! 多边形网格

use crate::math::Point;
use serde::{Deserialize, Serialize};

/// 网格面
///
/// 索引从 0 开始，指向所属网格的顶点序列。`d` 仅在四边形面上存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: Option<usize>,
}

impl Face {
    pub fn triangle(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c, d: None }
    }

    pub fn quad(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self {
            a,
            b,
            c,
            d: Some(d),
        }
    }

    pub fn is_quad(&self) -> bool {
        self.d.is_some()
    }

    /// 面引用的顶点索引
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        [self.a, self.b, self.c].into_iter().chain(self.d)
    }
}

/// 网格
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// 所有面索引都在顶点范围内
    pub fn is_valid(&self) -> bool {
        let n = self.vertices.len();
        self.faces.iter().all(|f| f.indices().all(|i| i < n))
    }

    /// 按三角形计数（四边形计为两个）
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|f| if f.is_quad() { 2 } else { 1 })
            .sum()
    }
}
