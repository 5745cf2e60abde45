//! # Error 模块
//!
//! 定义 blackjack-runtime 中使用的错误类型。

use thiserror::Error;

/// 牌局错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// 当前阶段不允许此操作
    #[error("当前阶段不允许此操作：期望 {expected}，实际 {actual}")]
    PhaseMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// 牌堆已空
    #[error("牌堆已空，无法继续发牌")]
    EmptyDeck,
}

/// Result 类型别名
pub type RoundResult<T> = Result<T, RoundError>;
