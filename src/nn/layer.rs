/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : GraphConv（图卷积）层
 *
 * 前向计算：Ĥ = Â·H（邻居聚合），H' = Ĥ·W + b。
 * 层内不施加激活函数，由调用方（网络）决定——最后一层必须输出
 * 未经激活的logits供交叉熵损失使用。
 *
 * 参数只被优化器写入，`forward`/`backward`从不修改W和b。
 */

use super::aggregate::{Normalization, aggregate, aggregate_transpose};
use super::init::Init;
use super::GcnError;
use crate::graph::Graph;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;

/// GraphConv (图卷积) 层
///
/// # 输入/输出形状
/// - 输入：[`num_nodes`, `in_features`]
/// - 输出：[`num_nodes`, `out_features`]
#[derive(Debug)]
pub struct GraphConv {
    /// 权重参数 [`in_features`, `out_features`]
    weight: Array2<f32>,
    /// 偏置参数 [1, `out_features`]
    bias: Array2<f32>,
    /// 聚合时的归一化方式
    norm: Normalization,
    /// 前向传播缓存的聚合结果Ĥ（反向传播计算dW时使用）
    agg_cache: Option<Array2<f32>>,
}

/// `GraphConv::backward`的输出：参数梯度与输入梯度
#[derive(Debug)]
pub struct GraphConvGrads {
    /// dL/dW [`in_features`, `out_features`]
    pub d_weight: Array2<f32>,
    /// dL/db [1, `out_features`]
    pub d_bias: Array2<f32>,
    /// dL/dH [`num_nodes`, `in_features`]（继续向前一层回传）
    pub d_input: Array2<f32>,
}

impl GraphConv {
    /// 创建新的GraphConv层
    ///
    /// # 参数
    /// - `in_features`: 输入特征维度
    /// - `out_features`: 输出特征维度
    /// - `norm`: 聚合归一化方式
    /// - `init`: 权重初始化策略（偏置恒为零初始化）
    /// - `rng`: 调用方持有的随机数生成器（种子由上层统一管理）
    pub fn new(
        in_features: usize,
        out_features: usize,
        norm: Normalization,
        init: Init,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            weight: init.generate(in_features, out_features, rng),
            bias: Init::Zeros.generate(1, out_features, rng),
            norm,
            agg_cache: None,
        }
    }

    /// 前向传播：`aggregate(graph, h) @ W + b`
    ///
    /// # 错误
    /// - 特征宽度与`in_features`不一致时返回[`GcnError::FeatureDimMismatch`]
    /// - 特征行数与节点数不一致时返回[`GcnError::NodeCountMismatch`]
    pub fn forward(&mut self, graph: &Graph, h: &Array2<f32>) -> Result<Array2<f32>, GcnError> {
        if h.ncols() != self.in_features() {
            return Err(GcnError::FeatureDimMismatch {
                expected: self.in_features(),
                got: h.ncols(),
            });
        }

        let agg = aggregate(graph, h, self.norm)?;
        let out = agg.dot(&self.weight) + &self.bias;
        self.agg_cache = Some(agg);
        Ok(out)
    }

    /// 反向传播
    ///
    /// 由上游梯度`upstream`（形状[`num_nodes`, `out_features`]）计算：
    /// - dW = Ĥᵀ·upstream
    /// - db = 按节点求和的upstream
    /// - dH = Âᵀ·(upstream·Wᵀ)（聚合的伴随算子）
    pub fn backward(
        &self,
        graph: &Graph,
        upstream: &Array2<f32>,
    ) -> Result<GraphConvGrads, GcnError> {
        let agg = self
            .agg_cache
            .as_ref()
            .ok_or(GcnError::BackwardBeforeForward)?;

        let d_weight = agg.t().dot(upstream);
        let d_bias = upstream.sum_axis(Axis(0)).insert_axis(Axis(0));
        let d_agg = upstream.dot(&self.weight.t());
        let d_input = aggregate_transpose(graph, &d_agg, self.norm)?;

        Ok(GraphConvGrads {
            d_weight,
            d_bias,
            d_input,
        })
    }

    /// 输入特征维度
    pub fn in_features(&self) -> usize {
        self.weight.nrows()
    }

    /// 输出特征维度
    pub fn out_features(&self) -> usize {
        self.weight.ncols()
    }

    /// 权重矩阵（只读）
    pub const fn weight(&self) -> &Array2<f32> {
        &self.weight
    }

    /// 偏置向量（只读）
    pub const fn bias(&self) -> &Array2<f32> {
        &self.bias
    }

    /// 权重与偏置的可变引用（固定顺序：W在前b在后，供优化器使用）
    pub fn params_mut(&mut self) -> (&mut Array2<f32>, &mut Array2<f32>) {
        (&mut self.weight, &mut self.bias)
    }
}
