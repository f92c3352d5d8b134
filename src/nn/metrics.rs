/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 评估指标——argmax预测与带掩码的准确率
 */

use ndarray::Array2;

/// 每行取argmax得到预测类别
pub fn argmax_rows(logits: &Array2<f32>) -> Vec<usize> {
    logits
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_val = f32::NEG_INFINITY;
            for (c, &v) in row.iter().enumerate() {
                if v > best_val {
                    best = c;
                    best_val = v;
                }
            }
            best
        })
        .collect()
}

/// 掩码选中行上的argmax预测准确率
///
/// 调用方保证`labels`与`mask`长度等于logits行数（debug下断言，
/// 与损失函数的`MaskLenMismatch`检查对应）。
/// 掩码未选中任何行时准确率无定义，返回`f32::NAN`
/// （绝不悄悄当作0或1），由调用方原样上报。
pub fn masked_accuracy(logits: &Array2<f32>, labels: &[usize], mask: &[bool]) -> f32 {
    debug_assert_eq!(mask.len(), logits.nrows());
    debug_assert_eq!(labels.len(), logits.nrows());

    let predictions = argmax_rows(logits);

    let mut selected = 0usize;
    let mut correct = 0usize;
    let n = mask.len().min(predictions.len()).min(labels.len());
    for i in 0..n {
        if !mask[i] {
            continue;
        }
        selected += 1;
        if predictions[i] == labels[i] {
            correct += 1;
        }
    }

    if selected == 0 {
        return f32::NAN;
    }
    correct as f32 / selected as f32
}
