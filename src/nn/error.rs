/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : 神经网络模块的错误类型
 */

use thiserror::Error;

/// 前向/反向传播与训练过程中的错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GcnError {
    /// 特征矩阵的行数与图的节点数不一致
    #[error("特征矩阵行数({got})与图的节点数({expected})不一致")]
    NodeCountMismatch { expected: usize, got: usize },

    /// 特征宽度与层声明的输入维度不一致（首次前向传播时报错）
    #[error("特征维度不匹配：层的输入维度为{expected}，但收到的特征宽度为{got}")]
    FeatureDimMismatch { expected: usize, got: usize },

    /// 掩码长度与节点数不一致
    #[error("掩码长度({got})与节点数({expected})不一致")]
    MaskLenMismatch { expected: usize, got: usize },

    /// 标签超出类别范围
    #[error("标签{label}超出类别范围[0, {num_classes})")]
    LabelOutOfRange { label: usize, num_classes: usize },

    /// 训练掩码未选中任何节点，损失无定义
    #[error("掩码未选中任何节点，无法计算损失")]
    EmptyMask,

    /// 反向传播前未执行前向传播（缓存为空）
    #[error("缓存为空，反向传播前须先执行前向传播")]
    BackwardBeforeForward,

    /// 优化器收到的参数与梯度数量不一致
    #[error("参数数量({params})与梯度数量({grads})不一致")]
    ParamGradCountMismatch { params: usize, grads: usize },
}
