/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 4节点玩具图端到端测试 - 两个双节点社区的二分类
 *                 图结构：edges {(0,1),(1,0),(2,3),(3,2)} + 全部自环
 *                 网络结构：GraphConv(2, 8) -> ReLU -> GraphConv(8, 2)
 */
use ndarray::Array2;
use only_gcn::data::GraphDataset;
use only_gcn::graph::Graph;
use only_gcn::nn::{aggregate, GcnError, Normalization};
use only_gcn::train::{TrainConfig, Trainer};

/// 构建规格场景：N=4，D=2，2类，节点{0,1}为类0、{2,3}为类1，全部划入训练集
fn toy_dataset() -> GraphDataset {
    let graph = Graph::new(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])
        .unwrap()
        .with_self_loops();

    let mut features = Array2::zeros((4, 2));
    features[[0, 0]] = 1.0;
    features[[0, 1]] = 0.2;
    features[[1, 0]] = 0.8;
    features[[1, 1]] = -0.1;
    features[[2, 0]] = -1.0;
    features[[2, 1]] = 0.1;
    features[[3, 0]] = -0.9;
    features[[3, 1]] = -0.2;

    GraphDataset::new(
        graph,
        features,
        vec![0, 0, 1, 1],
        vec![true; 4],
        vec![false; 4],
        vec![false; 4],
        2,
    )
    .unwrap()
}

#[test]
fn test_toy_aggregation_row() {
    let dataset = toy_dataset();

    // 自环存在时，节点0的聚合行 = feature[0] + feature[1]
    let agg = aggregate(&dataset.graph, &dataset.features, Normalization::Sum).unwrap();
    let expected_0 = dataset.features[[0, 0]] + dataset.features[[1, 0]];
    let expected_1 = dataset.features[[0, 1]] + dataset.features[[1, 1]];
    assert!((agg[[0, 0]] - expected_0).abs() < 1e-6);
    assert!((agg[[0, 1]] - expected_1).abs() < 1e-6);
}

#[test]
fn test_toy_training_converges() -> Result<(), GcnError> {
    let start_time = std::time::Instant::now();
    let dataset = toy_dataset();

    // 规格预算：学习率0.01下200个epoch内训练准确率须收敛到1.0
    let config = TrainConfig {
        epochs: 200,
        learning_rate: 0.01,
        hidden_dim: 8,
        seed: 42,
        log_every: 50,
        ..TrainConfig::default()
    };
    let report = Trainer::new(config).fit(&dataset)?;

    let converged_at = report
        .history
        .iter()
        .position(|r| r.train_accuracy >= 1.0);
    let duration = start_time.elapsed();
    println!("总耗时: {duration:.2?}");

    match converged_at {
        Some(epoch) => {
            println!(
                "🎉 测试通过！第{}个epoch训练准确率达到100%，最终loss={:.4}",
                epoch + 1,
                report.history.last().unwrap().loss
            );
            Ok(())
        }
        None => {
            println!(
                "❌ 收敛失败：200个epoch后训练准确率仅为{:.1}%",
                report.final_train_accuracy * 100.0
            );
            panic!("4节点玩具图未能在200个epoch内收敛");
        }
    }
}

#[test]
fn test_toy_rerun_is_deterministic() {
    let dataset = toy_dataset();
    let config = TrainConfig {
        epochs: 50,
        hidden_dim: 8,
        ..TrainConfig::default()
    };

    let report_a = Trainer::new(config.clone()).fit(&dataset).unwrap();
    let report_b = Trainer::new(config).fit(&dataset).unwrap();

    for (a, b) in report_a.history.iter().zip(report_b.history.iter()) {
        assert_eq!(a.loss, b.loss, "相同种子下第{}个epoch的loss应一致", a.epoch);
        assert_eq!(a.train_accuracy, b.train_accuracy);
    }
}
