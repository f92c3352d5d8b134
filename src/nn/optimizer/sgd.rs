/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 梯度下降优化器实现
 */

use super::base::{check_slots, Optimizer, OptimizerState};
use super::super::GcnError;
use ndarray::Array2;

/// SGD (随机梯度下降) 优化器
pub struct Sgd {
    state: OptimizerState,
}

impl Sgd {
    /// 创建新的SGD优化器
    pub const fn new(learning_rate: f32) -> Self {
        Self {
            state: OptimizerState::new(learning_rate),
        }
    }
}

impl Optimizer for Sgd {
    /// 更新参数：θ = θ - α * ∇θ
    fn step(
        &mut self,
        params: &mut [&mut Array2<f32>],
        grads: &[&Array2<f32>],
    ) -> Result<(), GcnError> {
        check_slots(params, grads)?;

        let lr = self.state.learning_rate();
        for (param, grad) in params.iter_mut().zip(grads.iter()) {
            param.scaled_add(-lr, grad);
        }
        Ok(())
    }

    /// SGD无累积状态
    fn reset(&mut self) {}

    fn learning_rate(&self) -> f32 {
        self.state.learning_rate()
    }

    fn set_learning_rate(&mut self, lr: f32) {
        self.state.set_learning_rate(lr);
    }
}
