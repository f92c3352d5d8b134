//! # Only GCN
//!
//! `only_gcn`项目用纯rust实现图卷积网络（GCN，[Kipf & Welling, 2017](https://arxiv.org/abs/1609.02907)）
//! 的消息传递与节点分类，作为教学用途的最小可用实现：
//! 邻居聚合、图卷积层、两层网络、带掩码的交叉熵损失与训练循环都在本crate内，
//! 数值底层由[ndarray](https://docs.rs/ndarray)承担。
//!
//! 聚合默认采用简化的邻居求和（不做度归一化），这是刻意为教学保留的简化；
//! 完整的对称归一化 D̃^(-1/2)·Ã·D̃^(-1/2) 可通过配置启用。

pub mod data;
pub mod graph;
pub mod nn;
pub mod train;
