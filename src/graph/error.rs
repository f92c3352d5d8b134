/*
 * @Author       : 老董
 * @Date         : 2026-08-27
 * @Description  : Graph 模块的错误类型
 */

use thiserror::Error;

/// 图构建相关错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// 边引用了节点id范围之外的节点（构建时即报错）
    #[error("边({src}, {dst})引用了[0, {num_nodes})之外的节点id")]
    EdgeOutOfRange {
        src: usize,
        dst: usize,
        num_nodes: usize,
    },

    /// 边列表的src/dst长度不一致（只可能来自被篡改的外部数据）
    #[error("边列表损坏：src长度{src_len}与dst长度{dst_len}不一致")]
    CorruptEdgeList { src_len: usize, dst_len: usize },
}
