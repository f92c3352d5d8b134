/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 带掩码的 Softmax + CrossEntropy 融合损失
 *
 * 将 Softmax 激活和交叉熵损失合并计算，具有以下优势：
 * 1. 数值稳定性：使用 log-sum-exp 技巧避免溢出
 * 2. 梯度简洁：∂L/∂x = softmax(x) - y
 *
 * 半监督节点分类只在训练掩码选中的行上计损失：
 * 损失对选中行取平均，未选中行的梯度恒为零。
 */

use super::GcnError;
use ndarray::Array2;

/// 计算带掩码的softmax交叉熵损失及其对logits的梯度
///
/// # 参数
/// - `logits`: [N, C] 未经激活的类别分数
/// - `labels`: 长度N的类别id，取值须在[0, C)内
/// - `mask`: 长度N的布尔选择器，损失只在`mask[i] == true`的行上计算
///
/// # 返回
/// `(loss, d_logits)`：对选中行平均的标量损失，
/// 以及梯度矩阵[N, C]（选中行为`(softmax - onehot) / |mask|`，其余行为零）。
///
/// # 错误
/// - 掩码未选中任何行时返回[`GcnError::EmptyMask`]（在零个节点上优化没有意义）
/// - 标签越界返回[`GcnError::LabelOutOfRange`]
/// - `labels`/`mask`长度与N不一致时返回[`GcnError::MaskLenMismatch`]
pub fn masked_softmax_cross_entropy(
    logits: &Array2<f32>,
    labels: &[usize],
    mask: &[bool],
) -> Result<(f32, Array2<f32>), GcnError> {
    let n = logits.nrows();
    let num_classes = logits.ncols();

    if labels.len() != n || mask.len() != n {
        return Err(GcnError::MaskLenMismatch {
            expected: n,
            got: if labels.len() != n {
                labels.len()
            } else {
                mask.len()
            },
        });
    }

    let selected = mask.iter().filter(|&&m| m).count();
    if selected == 0 {
        return Err(GcnError::EmptyMask);
    }

    let mut total_loss = 0.0f32;
    let mut d_logits = Array2::zeros((n, num_classes));

    for i in 0..n {
        if !mask[i] {
            continue;
        }
        let label = labels[i];
        if label >= num_classes {
            return Err(GcnError::LabelOutOfRange { label, num_classes });
        }

        let row = logits.row(i);

        // 数值稳定：先减去行最大值
        let max_val = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let sum_exp: f32 = row.iter().map(|&x| (x - max_val).exp()).sum();
        let log_sum_exp = sum_exp.ln();

        // L_i = -(x_y - max - log_sum_exp)
        total_loss += -(row[label] - max_val - log_sum_exp);

        // ∂L/∂x_c = (softmax_c - 1[c == y]) / |mask|
        let mut grad_row = d_logits.row_mut(i);
        for c in 0..num_classes {
            let softmax_c = (row[c] - max_val).exp() / sum_exp;
            grad_row[c] = softmax_c / selected as f32;
        }
        grad_row[label] -= 1.0 / selected as f32;
    }

    Ok((total_loss / selected as f32, d_logits))
}
