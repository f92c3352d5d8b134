/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 图存储——不可变的邻接结构与入邻居索引
 *
 * 节点id为[0, N)的稠密零基区间；边以COO形式记录，构建时同时生成
 * CSR风格的入邻居索引，使"节点u的入邻居"查询为O(deg(u))、
 * 整图聚合为O(E)而非O(N²)。
 */

use serde::{Deserialize, Serialize};

mod error;
pub use error::GraphError;


/// 有向图（无向图以双向边表示）
///
/// 构建完成后即不可变：训练过程中所有组件只读本结构。
/// 自环通过[`with_self_loops`](Self::with_self_loops)一次性追加，重复调用是幂等的。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    num_nodes: usize,
    /// COO格式的边列表（src[i] -> dst[i]）
    edge_src: Vec<usize>,
    edge_dst: Vec<usize>,
    /// CSR入邻居索引：节点u的入邻居为
    /// `in_neighbors[in_offsets[u]..in_offsets[u + 1]]`
    in_offsets: Vec<usize>,
    in_neighbors: Vec<usize>,
    has_self_loops: bool,
}

impl Graph {
    /// 由节点数和边列表构建图
    ///
    /// # 错误
    /// 任一边的端点超出[0, `num_nodes`)时返回[`GraphError::EdgeOutOfRange`]。
    pub fn new(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        // 1. 验证每条边的端点
        for &(src, dst) in edges {
            if src >= num_nodes || dst >= num_nodes {
                return Err(GraphError::EdgeOutOfRange {
                    src,
                    dst,
                    num_nodes,
                });
            }
        }

        // 2. 构建COO与CSR索引
        let edge_src: Vec<usize> = edges.iter().map(|e| e.0).collect();
        let edge_dst: Vec<usize> = edges.iter().map(|e| e.1).collect();
        let (in_offsets, in_neighbors) = Self::build_in_index(num_nodes, &edge_src, &edge_dst);

        Ok(Self {
            num_nodes,
            edge_src,
            edge_dst,
            in_offsets,
            in_neighbors,
            has_self_loops: false,
        })
    }

    /// 为每个节点追加一条自环边(i, i)
    ///
    /// GCN中自环使节点在聚合时保留自身上一层的表征（Ã = A + I）。
    /// 本方法内部带幂等保护：已有自环时原样返回。
    #[must_use]
    pub fn with_self_loops(mut self) -> Self {
        if self.has_self_loops {
            return self;
        }

        for i in 0..self.num_nodes {
            self.edge_src.push(i);
            self.edge_dst.push(i);
        }
        let (in_offsets, in_neighbors) =
            Self::build_in_index(self.num_nodes, &self.edge_src, &self.edge_dst);
        self.in_offsets = in_offsets;
        self.in_neighbors = in_neighbors;
        self.has_self_loops = true;
        self
    }

    /// 重新校验来自外部（如磁盘缓存反序列化）的图结构
    ///
    /// 反序列化绕过了[`Graph::new`]的构建检查，缓存文件也可能被篡改。
    /// 本方法重新检查每条边的端点，并从COO边列表重建入邻居索引，
    /// 使外部来源的图满足与构建路径相同的不变量。
    pub fn revalidate(mut self) -> Result<Self, GraphError> {
        if self.edge_src.len() != self.edge_dst.len() {
            return Err(GraphError::CorruptEdgeList {
                src_len: self.edge_src.len(),
                dst_len: self.edge_dst.len(),
            });
        }
        for (&src, &dst) in self.edge_src.iter().zip(self.edge_dst.iter()) {
            if src >= self.num_nodes || dst >= self.num_nodes {
                return Err(GraphError::EdgeOutOfRange {
                    src,
                    dst,
                    num_nodes: self.num_nodes,
                });
            }
        }

        let (in_offsets, in_neighbors) =
            Self::build_in_index(self.num_nodes, &self.edge_src, &self.edge_dst);
        self.in_offsets = in_offsets;
        self.in_neighbors = in_neighbors;
        Ok(self)
    }

    /// 节点数N
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// 边数（含已追加的自环）
    pub fn num_edges(&self) -> usize {
        self.edge_src.len()
    }

    /// 是否已追加自环
    pub const fn has_self_loops(&self) -> bool {
        self.has_self_loops
    }

    /// 节点u的入邻居（自环存在时包含u自身）
    pub fn in_neighbors(&self, u: usize) -> &[usize] {
        &self.in_neighbors[self.in_offsets[u]..self.in_offsets[u + 1]]
    }

    /// 节点u的入度（自环存在时计入自身）
    pub fn in_degree(&self, u: usize) -> usize {
        self.in_offsets[u + 1] - self.in_offsets[u]
    }

    /// 由COO边列表构建CSR入邻居索引（计数 -> 前缀和 -> 填充）
    fn build_in_index(
        num_nodes: usize,
        edge_src: &[usize],
        edge_dst: &[usize],
    ) -> (Vec<usize>, Vec<usize>) {
        let mut counts = vec![0usize; num_nodes];
        for &dst in edge_dst {
            counts[dst] += 1;
        }

        let mut in_offsets = vec![0usize; num_nodes + 1];
        for u in 0..num_nodes {
            in_offsets[u + 1] = in_offsets[u] + counts[u];
        }

        let mut cursors = in_offsets[..num_nodes].to_vec();
        let mut in_neighbors = vec![0usize; edge_src.len()];
        for (&src, &dst) in edge_src.iter().zip(edge_dst.iter()) {
            in_neighbors[cursors[dst]] = src;
            cursors[dst] += 1;
        }

        (in_offsets, in_neighbors)
    }
}
