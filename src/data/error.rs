//! 数据集加载错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 数据集构建与磁盘缓存相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 格式错误（JSON解析失败等）
    #[error("格式错误: {0}")]
    FormatError(String),

    /// 形状不匹配
    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// 标签超出类别范围
    #[error("标签 {label} 超出类别范围 [0, {num_classes})")]
    LabelOutOfRange { label: usize, num_classes: usize },

    /// 图构建失败
    #[error("图构建失败: {0}")]
    GraphError(#[from] crate::graph::GraphError),
}
