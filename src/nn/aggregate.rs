/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 消息传递聚合——图卷积的核心数值步骤
 *
 * 对每个节点u，把其所有入邻居v（含自环时的u自身）的当前特征行求和，
 * 即稀疏矩阵乘 Ĥ = Â·H。默认不做度归一化（教学用简化）；
 * 对称归一化 D̃^(-1/2)·Ã·D̃^(-1/2) 作为可选配置提供。
 *
 * 实现沿边列表逐行累加，单次调用复杂度O(E·D)。
 */

use super::GcnError;
use crate::graph::Graph;
use ndarray::Array2;

/// 聚合时的度归一化方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// 邻居特征直接求和（简化变体，默认）
    #[default]
    Sum,
    /// 对称归一化：边(v, u)的系数为 1/√(d̃(v)·d̃(u))
    Symmetric,
}

/// 计算聚合矩阵 Ĥ = Â·H
///
/// 输出的第u行 = Σ_{v ∈ in(u)} coeff(v, u)·H\[v\]。
/// 无入邻居且无自环的节点得到全零行。
pub fn aggregate(
    graph: &Graph,
    h: &Array2<f32>,
    norm: Normalization,
) -> Result<Array2<f32>, GcnError> {
    check_node_count(graph, h)?;

    let n = graph.num_nodes();
    let d = h.ncols();
    let mut out = Array2::zeros((n, d));

    match norm {
        Normalization::Sum => {
            for u in 0..n {
                let mut row = out.row_mut(u);
                for &v in graph.in_neighbors(u) {
                    row += &h.row(v);
                }
            }
        }
        Normalization::Symmetric => {
            let inv_sqrt = inv_sqrt_degrees(graph);
            for u in 0..n {
                let mut row = out.row_mut(u);
                for &v in graph.in_neighbors(u) {
                    row.scaled_add(inv_sqrt[u] * inv_sqrt[v], &h.row(v));
                }
            }
        }
    }
    Ok(out)
}

/// 计算转置聚合 Ĝ = Âᵀ·G，即沿反向边的聚合
///
/// 这是反向传播所需的伴随算子：前向沿v→u聚合，梯度沿u→v回流。
/// 对称归一化的系数关于(u, v)对称，故两个方向共用同一套系数。
pub fn aggregate_transpose(
    graph: &Graph,
    g: &Array2<f32>,
    norm: Normalization,
) -> Result<Array2<f32>, GcnError> {
    check_node_count(graph, g)?;

    let n = graph.num_nodes();
    let d = g.ncols();
    let mut out = Array2::zeros((n, d));

    match norm {
        Normalization::Sum => {
            for u in 0..n {
                let g_row = g.row(u);
                for &v in graph.in_neighbors(u) {
                    let mut row = out.row_mut(v);
                    row += &g_row;
                }
            }
        }
        Normalization::Symmetric => {
            let inv_sqrt = inv_sqrt_degrees(graph);
            for u in 0..n {
                let g_row = g.row(u);
                for &v in graph.in_neighbors(u) {
                    out.row_mut(v).scaled_add(inv_sqrt[u] * inv_sqrt[v], &g_row);
                }
            }
        }
    }
    Ok(out)
}

/// 每个节点入度的-1/2次幂；孤立节点（度为0）记为0，反正不会被任何边用到
fn inv_sqrt_degrees(graph: &Graph) -> Vec<f32> {
    (0..graph.num_nodes())
        .map(|u| {
            let d = graph.in_degree(u) as f32;
            if d > 0.0 { d.sqrt().recip() } else { 0.0 }
        })
        .collect()
}

fn check_node_count(graph: &Graph, h: &Array2<f32>) -> Result<(), GcnError> {
    if h.nrows() != graph.num_nodes() {
        return Err(GcnError::NodeCountMismatch {
            expected: graph.num_nodes(),
            got: h.nrows(),
        });
    }
    Ok(())
}
