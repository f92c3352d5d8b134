/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 负责GCN网络的构建：聚合、层、网络、损失、指标与优化器
 */

mod aggregate;
mod error;
mod init;
mod layer;
mod loss;
mod metrics;
mod network;
pub mod optimizer;

pub use aggregate::{aggregate, aggregate_transpose, Normalization};
pub use error::GcnError;
pub use init::Init;
pub use layer::{GraphConv, GraphConvGrads};
pub use loss::masked_softmax_cross_entropy;
pub use metrics::{argmax_rows, masked_accuracy};
pub use network::{Gcn, GcnGrads};
pub use optimizer::{Adam, Optimizer, Sgd};

#[cfg(test)]
mod tests;
