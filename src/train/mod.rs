/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 训练循环——前向、损失、反向、更新、评估的逐epoch状态机
 *
 * 每个epoch严格顺序执行：整图前向传播 -> 训练掩码上的交叉熵损失 ->
 * 反向传播 -> 优化器更新 -> 在train/val/test掩码上评估准确率。
 * 优化器是参数的唯一写入者；图与特征/标签/掩码全程只读。
 * 固定epoch预算，无提前停止；"迄今最佳验证准确率"及其对应的
 * 测试准确率是必须产出的指标。
 */

use crate::data::GraphDataset;
use crate::nn::{
    masked_accuracy, masked_softmax_cross_entropy, Adam, Gcn, GcnError, Normalization, Optimizer,
    Sgd,
};


/// 优化器选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizerKind {
    /// Adam（默认参数β1=0.9，β2=0.999，ε=1e-8）
    #[default]
    Adam,
    /// 朴素梯度下降
    Sgd,
}

/// 训练配置
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// epoch预算（到达后即终止，无提前停止）
    pub epochs: usize,
    /// 学习率
    pub learning_rate: f32,
    /// 隐藏层维度
    pub hidden_dim: usize,
    /// 参数初始化种子（相同种子+相同数据 => 相同训练轨迹）
    pub seed: u64,
    /// 聚合归一化方式
    pub normalization: Normalization,
    /// 优化器选择
    pub optimizer: OptimizerKind,
    /// 每隔多少epoch打印一次进度（0表示不打印）
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 200,
            learning_rate: 0.01,
            hidden_dim: 16,
            seed: 42,
            normalization: Normalization::Sum,
            optimizer: OptimizerKind::Adam,
            log_every: 0,
        }
    }
}

/// 单个epoch的记录
///
/// 准确率在空掩码上无定义，以NaN原样记录，绝不折算成0。
#[derive(Debug, Clone)]
pub struct EpochRecord {
    pub epoch: usize,
    pub loss: f32,
    pub train_accuracy: f32,
    pub val_accuracy: f32,
    pub test_accuracy: f32,
}

/// 训练产出
#[derive(Debug)]
pub struct TrainReport {
    /// 全部epoch的轨迹
    pub history: Vec<EpochRecord>,
    /// 迄今最佳验证准确率（验证掩码为空时保持NaN）
    pub best_val_accuracy: f32,
    /// 取得最佳验证准确率那个epoch的测试准确率
    pub test_at_best_val: f32,
    /// 最后一个epoch的训练准确率
    pub final_train_accuracy: f32,
    /// 训练后的模型（可继续用于推理）
    pub model: Gcn,
}

/// 训练器
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub const fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// 在数据集上训练一个两层GCN
    ///
    /// 前向/反向中的任何错误直接向调用方传播，内部不做恢复。
    pub fn fit(&self, dataset: &GraphDataset) -> Result<TrainReport, GcnError> {
        let cfg = &self.config;

        // Init：构建网络与优化器
        let mut model = Gcn::new(
            dataset.num_features(),
            cfg.hidden_dim,
            dataset.num_classes(),
            cfg.normalization,
            cfg.seed,
        );
        let mut optimizer: Box<dyn Optimizer> = match cfg.optimizer {
            OptimizerKind::Adam => Box::new(Adam::new_default(cfg.learning_rate)),
            OptimizerKind::Sgd => Box::new(Sgd::new(cfg.learning_rate)),
        };

        let graph = &dataset.graph;
        let features = &dataset.features;
        let labels = &dataset.labels;

        let mut history = Vec::with_capacity(cfg.epochs);
        let mut best_val_accuracy = f32::NAN;
        let mut test_at_best_val = f32::NAN;

        for epoch in 0..cfg.epochs {
            // Forward -> Loss -> Backward -> Update
            let logits = model.forward(graph, features)?;
            let (loss, d_logits) =
                masked_softmax_cross_entropy(&logits, labels, &dataset.train_mask)?;
            let grads = model.backward(graph, &d_logits)?;
            optimizer.step(&mut model.parameters_mut(), &grads.as_slots())?;

            // Evaluate：参数更新后重新前向取最新预测
            let logits = model.forward(graph, features)?;
            let train_accuracy = masked_accuracy(&logits, labels, &dataset.train_mask);
            let val_accuracy = masked_accuracy(&logits, labels, &dataset.val_mask);
            let test_accuracy = masked_accuracy(&logits, labels, &dataset.test_mask);

            // NaN（空验证集）永远不会成为"最佳"
            if !val_accuracy.is_nan()
                && (best_val_accuracy.is_nan() || val_accuracy > best_val_accuracy)
            {
                best_val_accuracy = val_accuracy;
                test_at_best_val = test_accuracy;
            }

            if cfg.log_every > 0 && (epoch + 1) % cfg.log_every == 0 {
                println!(
                    "训练回合 {:4}: loss={:.4}, train={:.3}, val={:.3}, test={:.3}",
                    epoch + 1,
                    loss,
                    train_accuracy,
                    val_accuracy,
                    test_accuracy
                );
            }

            history.push(EpochRecord {
                epoch,
                loss,
                train_accuracy,
                val_accuracy,
                test_accuracy,
            });
        }

        let final_train_accuracy = history
            .last()
            .map_or(f32::NAN, |record| record.train_accuracy);

        Ok(TrainReport {
            history,
            best_val_accuracy,
            test_at_best_val,
            final_train_accuracy,
            model,
        })
    }
}
