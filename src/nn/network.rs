/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 两层GCN网络
 *
 * 网络结构: GraphConv(in, hidden) -> ReLU -> GraphConv(hidden, classes)
 * 输出为未经激活的logits [N, C]。参数不变时forward是确定性的：
 * 相同输入两次调用产生完全相同的输出。
 */

use super::aggregate::Normalization;
use super::init::Init;
use super::layer::{GraphConv, GraphConvGrads};
use super::GcnError;
use crate::graph::Graph;
use ndarray::{Array2, Zip};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 两层GCN节点分类网络
#[derive(Debug)]
pub struct Gcn {
    conv1: GraphConv,
    conv2: GraphConv,
    /// ReLU后的隐藏层输出（反向传播还原ReLU掩码用）
    hidden_cache: Option<Array2<f32>>,
}

/// 整个网络的参数梯度（固定顺序：w1, b1, w2, b2）
#[derive(Debug)]
pub struct GcnGrads {
    pub conv1: GraphConvGrads,
    pub conv2: GraphConvGrads,
}

impl GcnGrads {
    /// 按固定槽位顺序（w1, b1, w2, b2）取出梯度，与
    /// [`Gcn::parameters_mut`]一一对应
    pub fn as_slots(&self) -> [&Array2<f32>; 4] {
        [
            &self.conv1.d_weight,
            &self.conv1.d_bias,
            &self.conv2.d_weight,
            &self.conv2.d_bias,
        ]
    }
}

impl Gcn {
    /// 创建两层GCN（使用固定种子初始化，确保可重复性）
    ///
    /// 权重采用Xavier初始化，偏置零初始化。
    pub fn new(
        in_features: usize,
        hidden_features: usize,
        num_classes: usize,
        norm: Normalization,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            conv1: GraphConv::new(in_features, hidden_features, norm, Init::Xavier, &mut rng),
            conv2: GraphConv::new(hidden_features, num_classes, norm, Init::Xavier, &mut rng),
            hidden_cache: None,
        }
    }

    /// 前向传播：conv1 -> ReLU -> conv2，输出logits [N, C]
    pub fn forward(
        &mut self,
        graph: &Graph,
        features: &Array2<f32>,
    ) -> Result<Array2<f32>, GcnError> {
        let z1 = self.conv1.forward(graph, features)?;
        let h = z1.mapv(|x| x.max(0.0));
        let logits = self.conv2.forward(graph, &h)?;
        self.hidden_cache = Some(h);
        Ok(logits)
    }

    /// 反向传播：由dL/d_logits计算所有参数梯度
    ///
    /// ReLU的梯度门控用缓存的隐藏层输出还原（h>0 ⟺ z1>0，边界处梯度取0）。
    pub fn backward(&self, graph: &Graph, d_logits: &Array2<f32>) -> Result<GcnGrads, GcnError> {
        let h = self
            .hidden_cache
            .as_ref()
            .ok_or(GcnError::BackwardBeforeForward)?;

        let grads2 = self.conv2.backward(graph, d_logits)?;

        let mut d_z1 = grads2.d_input.clone();
        Zip::from(&mut d_z1).and(h).for_each(|g, &hv| {
            if hv <= 0.0 {
                *g = 0.0;
            }
        });
        let grads1 = self.conv1.backward(graph, &d_z1)?;

        Ok(GcnGrads {
            conv1: grads1,
            conv2: grads2,
        })
    }

    /// 按固定槽位顺序（w1, b1, w2, b2）取出参数的可变引用，供优化器更新
    pub fn parameters_mut(&mut self) -> [&mut Array2<f32>; 4] {
        let (w1, b1) = self.conv1.params_mut();
        let (w2, b2) = self.conv2.params_mut();
        [w1, b1, w2, b2]
    }

    /// 第一层（只读）
    pub const fn conv1(&self) -> &GraphConv {
        &self.conv1
    }

    /// 第二层（只读）
    pub const fn conv2(&self) -> &GraphConv {
        &self.conv2
    }
}
