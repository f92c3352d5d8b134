/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 优化器基础trait和辅助结构
 */

use super::super::GcnError;
use ndarray::Array2;

/// 优化器核心 trait
///
/// 参数按固定槽位顺序传入（网络的`parameters_mut`与梯度的`as_slots`
/// 保证顺序一致）。优化器是参数的唯一写入者：`step`完成前
/// 下一次前向传播不得读取参数。
pub trait Optimizer {
    /// 参数更新（使用已计算的梯度）
    ///
    /// 训练循环形如：
    /// ```ignore
    /// let logits = model.forward(&graph, &features)?;
    /// let (loss, d_logits) = masked_softmax_cross_entropy(&logits, &labels, &mask)?;
    /// let grads = model.backward(&graph, &d_logits)?;
    /// optimizer.step(&mut model.parameters_mut(), &grads.as_slots())?;
    /// ```
    fn step(
        &mut self,
        params: &mut [&mut Array2<f32>],
        grads: &[&Array2<f32>],
    ) -> Result<(), GcnError>;

    /// 重置累积状态
    fn reset(&mut self);

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 设置学习率
    fn set_learning_rate(&mut self, lr: f32);
}

/// 优化器状态管理（内部实现，不对外暴露）
pub(in crate::nn::optimizer) struct OptimizerState {
    /// 学习率
    learning_rate: f32,
}

impl OptimizerState {
    pub(in crate::nn::optimizer) const fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub(in crate::nn::optimizer) const fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub(in crate::nn::optimizer) const fn set_learning_rate(&mut self, lr: f32) {
        self.learning_rate = lr;
    }
}

/// 校验参数与梯度槽位数量一致
pub(in crate::nn::optimizer) fn check_slots(
    params: &[&mut Array2<f32>],
    grads: &[&Array2<f32>],
) -> Result<(), GcnError> {
    if params.len() != grads.len() {
        return Err(GcnError::ParamGradCountMismatch {
            params: params.len(),
            grads: grads.len(),
        });
    }
    Ok(())
}
