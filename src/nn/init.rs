/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 参数初始化策略
 */

use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// 参数初始化策略
#[derive(Debug, Clone, Copy)]
pub enum Init {
    /// 常数初始化
    Constant(f32),
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 正态分布
    Normal { mean: f32, std: f32 },
    /// Kaiming/He 初始化（适用于 `ReLU`）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于 Sigmoid/Tanh）
    Xavier,
}

impl Init {
    /// 生成初始化后的参数矩阵（使用指定的 RNG，保证可重复性）
    pub fn generate(&self, rows: usize, cols: usize, rng: &mut StdRng) -> Array2<f32> {
        match self {
            Self::Constant(v) => Array2::from_elem((rows, cols), *v),
            Self::Zeros => Array2::zeros((rows, cols)),
            Self::Ones => Array2::ones((rows, cols)),
            Self::Normal { mean, std } => normal_with_rng(*mean, *std, rows, cols, rng),
            Self::Kaiming => {
                let fan_in = rows;
                let std = (2.0 / fan_in as f32).sqrt();
                normal_with_rng(0.0, std, rows, cols, rng)
            }
            Self::Xavier => {
                let (fan_in, fan_out) = (rows, cols);
                let std = (2.0 / (fan_in + fan_out) as f32).sqrt();
                normal_with_rng(0.0, std, rows, cols, rng)
            }
        }
    }
}

/// Box-Muller变换采样正态分布（一次得到两个样本）
fn normal_with_rng(
    mean: f32,
    std_dev: f32,
    rows: usize,
    cols: usize,
    rng: &mut StdRng,
) -> Array2<f32> {
    let data_len = rows * cols;
    let mut data = Vec::with_capacity(data_len);

    while data.len() < data_len {
        let u1: f32 = rng.r#gen();
        let u2: f32 = rng.r#gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f32::consts::PI * u2;
        let z0 = mean + std_dev * r * theta.cos();
        let z1 = mean + std_dev * r * theta.sin();

        if z0.is_finite() {
            data.push(z0);
        }
        if data.len() < data_len && z1.is_finite() {
            data.push(z1);
        }
    }

    Array2::from_shape_vec((rows, cols), data).unwrap()
}
