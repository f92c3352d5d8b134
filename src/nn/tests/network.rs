use crate::graph::Graph;
use crate::nn::{Gcn, Normalization};
use approx::assert_relative_eq;
use ndarray::{array, Array2};

fn toy_graph() -> Graph {
    Graph::new(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])
        .unwrap()
        .with_self_loops()
}

#[test]
fn test_forward_outputs_logits_shape() {
    let graph = toy_graph();
    let mut model = Gcn::new(2, 8, 3, Normalization::Sum, 42);
    let features = Array2::<f32>::ones((4, 2));

    let logits = model.forward(&graph, &features).unwrap();
    assert_eq!(logits.shape(), &[4, 3]);
}

/// 参数不变时forward是确定性的：两次调用输出完全一致
#[test]
fn test_forward_is_deterministic() {
    let graph = toy_graph();
    let mut model = Gcn::new(2, 8, 2, Normalization::Sum, 42);
    let features = array![[1.0f32, -0.5], [0.3, 2.0], [-1.0, 1.0], [0.0, 0.7]];

    let logits1 = model.forward(&graph, &features).unwrap();
    let logits2 = model.forward(&graph, &features).unwrap();
    assert_eq!(logits1, logits2);
}

/// 相同种子构建的两个网络初始参数一致
#[test]
fn test_same_seed_same_init() {
    let model_a = Gcn::new(4, 8, 3, Normalization::Sum, 7);
    let model_b = Gcn::new(4, 8, 3, Normalization::Sum, 7);
    assert_eq!(model_a.conv1().weight(), model_b.conv1().weight());
    assert_eq!(model_a.conv2().weight(), model_b.conv2().weight());

    let model_c = Gcn::new(4, 8, 3, Normalization::Sum, 8);
    assert_ne!(model_a.conv1().weight(), model_c.conv1().weight());
}

/// 端到端数值梯度校验：损失取logits全元素之和
#[test]
fn test_backward_matches_numerical_grad() {
    let graph = toy_graph();
    let mut model = Gcn::new(2, 4, 2, Normalization::Sum, 3);
    let features = array![[0.5f32, -1.0], [1.5, 2.0], [-0.5, 1.0], [2.0, 0.0]];

    model.forward(&graph, &features).unwrap();
    let upstream = Array2::<f32>::ones((4, 2));
    let grads = model.backward(&graph, &upstream).unwrap();

    // 对第一层的一个权重分量做中心差分
    let eps = 1e-2f32;
    let (i, j) = (0, 1);
    let analytic = grads.conv1.d_weight[[i, j]];

    let mut loss_at = |delta: f32| -> f32 {
        {
            let [w1, _, _, _] = model.parameters_mut();
            w1[[i, j]] += delta;
        }
        let out = model.forward(&graph, &features).unwrap();
        {
            let [w1, _, _, _] = model.parameters_mut();
            w1[[i, j]] -= delta;
        }
        out.sum()
    };
    let numerical = (loss_at(eps) - loss_at(-eps)) / (2.0 * eps);

    assert_relative_eq!(analytic, numerical, epsilon = 1e-1, max_relative = 1e-2);
}

#[test]
fn test_parameter_slots_align_with_grad_slots() {
    let graph = toy_graph();
    let mut model = Gcn::new(2, 4, 2, Normalization::Sum, 3);
    let features = Array2::<f32>::ones((4, 2));

    model.forward(&graph, &features).unwrap();
    let grads = model.backward(&graph, &Array2::ones((4, 2))).unwrap();

    let grad_shapes: Vec<_> = grads
        .as_slots()
        .iter()
        .map(|g| g.shape().to_vec())
        .collect();
    let param_shapes: Vec<_> = model
        .parameters_mut()
        .iter()
        .map(|p| p.shape().to_vec())
        .collect();
    assert_eq!(grad_shapes, param_shapes);
}
