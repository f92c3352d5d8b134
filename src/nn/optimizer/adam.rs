/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : Adam优化器实现
 */

use super::base::{check_slots, Optimizer, OptimizerState};
use super::super::GcnError;
use ndarray::Array2;

/// Adam优化器
pub struct Adam {
    state: OptimizerState,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    /// 一阶矩估计（按参数槽位索引）
    m: Vec<Array2<f32>>,
    /// 二阶矩估计
    v: Vec<Array2<f32>>,
    /// 时间步
    t: usize,
}

impl Adam {
    /// 创建新的Adam优化器
    pub const fn new(learning_rate: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            state: OptimizerState::new(learning_rate),
            beta1,
            beta2,
            epsilon,
            m: Vec::new(),
            v: Vec::new(),
            t: 0,
        }
    }

    /// 使用默认参数创建Adam优化器
    pub const fn new_default(learning_rate: f32) -> Self {
        Self::new(learning_rate, 0.9, 0.999, 1e-8)
    }
}

impl Optimizer for Adam {
    /// 参数更新（使用已计算的梯度）
    fn step(
        &mut self,
        params: &mut [&mut Array2<f32>],
        grads: &[&Array2<f32>],
    ) -> Result<(), GcnError> {
        check_slots(params, grads)?;

        // 首次step时按梯度形状建立矩估计
        if self.m.is_empty() {
            self.m = grads.iter().map(|g| Array2::zeros(g.raw_dim())).collect();
            self.v = grads.iter().map(|g| Array2::zeros(g.raw_dim())).collect();
        }
        self.t += 1;

        let lr = self.state.learning_rate();
        let bias1 = 1.0 - self.beta1.powi(self.t as i32);
        let bias2 = 1.0 - self.beta2.powi(self.t as i32);

        for (slot, (param, grad)) in params.iter_mut().zip(grads.iter()).enumerate() {
            // 原地更新一阶矩估计: m = β1 * m + (1 - β1) * g
            let m = &mut self.m[slot];
            *m *= self.beta1;
            m.scaled_add(1.0 - self.beta1, grad);

            // 原地更新二阶矩估计: v = β2 * v + (1 - β2) * g²
            let v = &mut self.v[slot];
            *v *= self.beta2;
            v.scaled_add(1.0 - self.beta2, &grad.mapv(|g| g * g));

            // 偏差修正
            let m_hat = m.mapv(|x| x / bias1);
            let v_hat = v.mapv(|x| x / bias2);

            // 参数更新: θ = θ - α * m_hat / (√v_hat + ε)
            let update = &m_hat / &(v_hat.mapv(f32::sqrt) + self.epsilon);
            param.scaled_add(-lr, &update);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.m.clear();
        self.v.clear();
        self.t = 0;
    }

    fn learning_rate(&self) -> f32 {
        self.state.learning_rate()
    }

    fn set_learning_rate(&mut self, lr: f32) {
        self.state.set_learning_rate(lr);
    }
}
