/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 双社区合成数据集
 *
 * 两个社区各由一个环连接（i <-> i+1，双向边），社区之间无边，
 * 全部节点追加自环。特征 = 社区质心 + 高斯噪声：
 * 社区0质心为(+1, 0, ..., 0)，社区1为(-1, 0, ..., 0)。
 * 掩码按每社区的前若干个节点依次划为train/val，其余为test。
 */

use super::super::{DataError, GraphDataset};
use crate::graph::Graph;
use crate::nn::Init;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 双社区数据集配置
#[derive(Debug, Clone)]
pub struct TwoClustersConfig {
    /// 每个社区的节点数
    pub nodes_per_cluster: usize,
    /// 特征维度D（至少为1，第0维承载质心）
    pub feature_dim: usize,
    /// 特征噪声的标准差
    pub noise_std: f32,
    /// 每个社区划入训练集的节点数
    pub train_per_cluster: usize,
    /// 每个社区划入验证集的节点数（train之后紧接着取）
    pub val_per_cluster: usize,
    /// 随机种子
    pub seed: u64,
}

impl Default for TwoClustersConfig {
    fn default() -> Self {
        Self {
            nodes_per_cluster: 16,
            feature_dim: 4,
            noise_std: 0.3,
            train_per_cluster: 4,
            val_per_cluster: 4,
            seed: 42,
        }
    }
}

/// 生成双社区合成数据集
pub fn two_clusters(config: &TwoClustersConfig) -> Result<GraphDataset, DataError> {
    let per = config.nodes_per_cluster;
    let n = per * 2;
    let d = config.feature_dim;
    let mut rng = StdRng::seed_from_u64(config.seed);

    // 1. 每个社区连成双向环
    let mut edges = Vec::with_capacity(per * 4);
    for cluster in 0..2 {
        let base = cluster * per;
        for i in 0..per {
            let a = base + i;
            let b = base + (i + 1) % per;
            if a != b {
                edges.push((a, b));
                edges.push((b, a));
            }
        }
    }
    let graph = Graph::new(n, &edges)?.with_self_loops();

    // 2. 特征 = 质心 + 噪声
    let noise = Init::Normal {
        mean: 0.0,
        std: config.noise_std,
    }
    .generate(n, d, &mut rng);
    let mut features = noise;
    for u in 0..n {
        let centroid = if u < per { 1.0 } else { -1.0 };
        features[[u, 0]] += centroid;
    }

    // 3. 标签与掩码
    let labels: Vec<usize> = (0..n).map(|u| usize::from(u >= per)).collect();
    let mut train_mask = vec![false; n];
    let mut val_mask = vec![false; n];
    let mut test_mask = vec![false; n];
    for cluster in 0..2 {
        let base = cluster * per;
        for i in 0..per {
            let u = base + i;
            if i < config.train_per_cluster {
                train_mask[u] = true;
            } else if i < config.train_per_cluster + config.val_per_cluster {
                val_mask[u] = true;
            } else {
                test_mask[u] = true;
            }
        }
    }

    GraphDataset::new(
        graph,
        features,
        labels,
        train_mask,
        val_mask,
        test_mask,
        2,
    )
}
