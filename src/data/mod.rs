//! 数据集模块
//!
//! 对训练循环而言，数据集提供方是一个黑盒：给定标识，返回一张不可变的图
//! 加上特征矩阵、标签向量和train/val/test三个布尔掩码。
//!
//! # 主要组件
//!
//! - [`GraphDataset`]: 持有图、特征、标签与掩码的不可变数据集
//! - [`datasets::two_clusters`]: 内置的双社区合成数据集
//! - [`DataError`]: 数据集错误类型
//!
//! 数据集可通过[`GraphDataset::save_json`]/[`GraphDataset::load_json`]
//! 在磁盘上缓存，避免重复生成。

pub mod datasets;
pub mod error;

mod dataset;

#[cfg(test)]
mod tests;

// Re-exports
pub use dataset::GraphDataset;
pub use datasets::{two_clusters, TwoClustersConfig};
pub use error::DataError;
