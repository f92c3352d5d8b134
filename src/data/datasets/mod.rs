//! 内置数据集
//!
//! 目前提供双社区合成数据集，规模与划分可配置，
//! 用于在没有外部数据的情况下演示与测试整条训练流水线。

mod two_clusters;

pub use two_clusters::{two_clusters, TwoClustersConfig};
