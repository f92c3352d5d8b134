/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : GraphDataset——图 + 特征/标签/掩码的不可变数据集
 */

use super::DataError;
use crate::graph::Graph;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// 节点分类数据集
///
/// 加载时构建一次，之后全程只读；train/val/test掩码按约定两两不相交，
/// 但这里不做强制检查（见构建逻辑）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDataset {
    /// 邻接结构
    pub graph: Graph,
    /// 特征矩阵 [N, D]
    pub features: Array2<f32>,
    /// 标签向量，长度N，取值[0, `num_classes`)
    pub labels: Vec<usize>,
    /// 训练掩码，长度N
    pub train_mask: Vec<bool>,
    /// 验证掩码，长度N
    pub val_mask: Vec<bool>,
    /// 测试掩码，长度N
    pub test_mask: Vec<bool>,
    num_classes: usize,
}

impl GraphDataset {
    /// 构建数据集并验证各分量形状与标签范围
    ///
    /// # 错误
    /// - 特征行数、标签长度或任一掩码长度与节点数不一致时返回
    ///   [`DataError::ShapeMismatch`]
    /// - 标签越界返回[`DataError::LabelOutOfRange`]
    pub fn new(
        graph: Graph,
        features: Array2<f32>,
        labels: Vec<usize>,
        train_mask: Vec<bool>,
        val_mask: Vec<bool>,
        test_mask: Vec<bool>,
        num_classes: usize,
    ) -> Result<Self, DataError> {
        let n = graph.num_nodes();

        if features.nrows() != n {
            return Err(DataError::ShapeMismatch {
                expected: vec![n, features.ncols()],
                got: vec![features.nrows(), features.ncols()],
            });
        }
        for len in [
            labels.len(),
            train_mask.len(),
            val_mask.len(),
            test_mask.len(),
        ] {
            if len != n {
                return Err(DataError::ShapeMismatch {
                    expected: vec![n],
                    got: vec![len],
                });
            }
        }
        for &label in &labels {
            if label >= num_classes {
                return Err(DataError::LabelOutOfRange { label, num_classes });
            }
        }

        // 注意：掩码的两两不相交只是约定，这里刻意不强制
        Ok(Self {
            graph,
            features,
            labels,
            train_mask,
            val_mask,
            test_mask,
            num_classes,
        })
    }

    /// 节点数N
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// 特征维度D
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// 类别数C
    pub const fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// 把数据集缓存到磁盘（JSON格式）
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|e| DataError::FormatError(e.to_string()))
    }

    /// 从磁盘缓存加载数据集
    ///
    /// 缓存文件可能被篡改，反序列化后按构建路径重新验证：
    /// 图结构经[`Graph::revalidate`]重查边端点并重建入邻居索引，
    /// 特征/标签/掩码经[`GraphDataset::new`]重查形状与标签范围。
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let raw: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DataError::FormatError(e.to_string()))?;

        let graph = raw.graph.revalidate()?;
        Self::new(
            graph,
            raw.features,
            raw.labels,
            raw.train_mask,
            raw.val_mask,
            raw.test_mask,
            raw.num_classes,
        )
    }
}
