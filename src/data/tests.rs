use super::{two_clusters, DataError, GraphDataset, TwoClustersConfig};
use crate::graph::Graph;
use crate::nn::{aggregate, Normalization};
use ndarray::Array2;

fn toy_dataset() -> GraphDataset {
    let graph = Graph::new(4, &[(0, 1), (1, 0), (2, 3), (3, 2)])
        .unwrap()
        .with_self_loops();
    GraphDataset::new(
        graph,
        Array2::ones((4, 2)),
        vec![0, 0, 1, 1],
        vec![true; 4],
        vec![false; 4],
        vec![false; 4],
        2,
    )
    .unwrap()
}

#[test]
fn test_new_validates_feature_rows() {
    let graph = Graph::new(4, &[]).unwrap();
    let result = GraphDataset::new(
        graph,
        Array2::ones((3, 2)), // 行数3 != 节点数4
        vec![0; 4],
        vec![true; 4],
        vec![false; 4],
        vec![false; 4],
        2,
    );
    assert!(matches!(result, Err(DataError::ShapeMismatch { .. })));
}

#[test]
fn test_new_validates_mask_len() {
    let graph = Graph::new(4, &[]).unwrap();
    let result = GraphDataset::new(
        graph,
        Array2::ones((4, 2)),
        vec![0; 4],
        vec![true; 3], // 长度3 != 节点数4
        vec![false; 4],
        vec![false; 4],
        2,
    );
    assert!(matches!(result, Err(DataError::ShapeMismatch { .. })));
}

#[test]
fn test_new_validates_label_range() {
    let graph = Graph::new(2, &[]).unwrap();
    let result = GraphDataset::new(
        graph,
        Array2::ones((2, 2)),
        vec![0, 2], // 标签2越界
        vec![true; 2],
        vec![false; 2],
        vec![false; 2],
        2,
    );
    assert!(matches!(
        result,
        Err(DataError::LabelOutOfRange {
            label: 2,
            num_classes: 2
        })
    ));
}

#[test]
fn test_json_round_trip() {
    let dataset = toy_dataset();
    let path = std::env::temp_dir().join("only_gcn_dataset_round_trip.json");

    dataset.save_json(&path).unwrap();
    let loaded = GraphDataset::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.num_nodes(), dataset.num_nodes());
    assert_eq!(loaded.num_features(), dataset.num_features());
    assert_eq!(loaded.num_classes(), dataset.num_classes());
    assert_eq!(loaded.features, dataset.features);
    assert_eq!(loaded.labels, dataset.labels);
    assert_eq!(loaded.train_mask, dataset.train_mask);
    assert_eq!(loaded.graph.num_edges(), dataset.graph.num_edges());
    assert_eq!(loaded.graph.in_neighbors(0), dataset.graph.in_neighbors(0));
}

#[test]
fn test_load_json_rejects_out_of_range_edge() {
    let dataset = toy_dataset();
    let path = std::env::temp_dir().join("only_gcn_dataset_bad_edge.json");
    dataset.save_json(&path).unwrap();

    // 篡改缓存：把边(3, 2)的目标端点改成越界的9
    let text = std::fs::read_to_string(&path).unwrap();
    let tampered = text.replace("\"edge_dst\":[1,0,3,2,", "\"edge_dst\":[1,0,3,9,");
    assert_ne!(text, tampered);
    std::fs::write(&path, tampered).unwrap();

    let result = GraphDataset::load_json(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(DataError::GraphError(_))));
}

#[test]
fn test_load_json_rebuilds_tampered_in_index() {
    let dataset = toy_dataset();
    let path = std::env::temp_dir().join("only_gcn_dataset_bad_index.json");
    dataset.save_json(&path).unwrap();

    // 篡改缓存的入邻居索引为越界值：加载必须重建索引而不是照单全收，
    // 否则后续聚合会越界panic
    let text = std::fs::read_to_string(&path).unwrap();
    let tampered = text.replace(
        "\"in_neighbors\":[1,0,0,1,3,2,2,3]",
        "\"in_neighbors\":[9,9,9,9,9,9,9,9]",
    );
    assert_ne!(text, tampered);
    std::fs::write(&path, tampered).unwrap();

    let loaded = GraphDataset::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.graph.in_neighbors(0), &[1, 0]);
    let agg = aggregate(&loaded.graph, &loaded.features, Normalization::Sum).unwrap();
    assert_eq!(agg[[0, 0]], 2.0); // 入度2，特征全1
}

#[test]
fn test_load_json_missing_file() {
    let path = std::env::temp_dir().join("only_gcn_no_such_dataset.json");
    let result = GraphDataset::load_json(&path);
    assert!(matches!(result, Err(DataError::FileNotFound(_))));
}

#[test]
fn test_two_clusters_feeds_training_shapes() {
    let dataset = two_clusters(&TwoClustersConfig::default()).unwrap();
    assert_eq!(dataset.features.nrows(), dataset.num_nodes());
    assert_eq!(dataset.labels.len(), dataset.num_nodes());
}
