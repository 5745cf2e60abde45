//! # Blackjack Runtime
//!
//! 单人 21 点游戏的核心逻辑库。
//!
//! ## 架构概述
//!
//! `blackjack-runtime` 是纯逻辑核心，不依赖任何 IO、渲染引擎或系统时钟。
//! 宿主层（Host）驱动一局牌局的状态机，并根据返回的事实
//! （发出的牌、点数、结果）播放对应的视觉效果：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── player_hit() ──────────►│
//!   │◄─── Card ───────────────────│
//!   │     （宿主播放 hit 动画）      │
//! ```
//!
//! ## 核心类型
//!
//! - [`Card`] / [`Deck`]：牌与牌堆（带种子洗牌，可复现）
//! - [`Hand`]：手牌与 21 点点数计算（A 可作 11 或 1）
//! - [`Advice`]：简化基本策略给出的行动建议
//! - [`Round`]：一局牌局的阶段状态机
//!
//! ## 模块结构
//!
//! - [`card`]：花色、点数与单张牌
//! - [`deck`]：52 张牌堆与洗牌
//! - [`hand`]：手牌点数计算
//! - [`strategy`]：行动建议
//! - [`round`]：牌局状态机
//! - [`error`]：错误类型定义

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod round;
pub mod strategy;

// 重导出核心类型
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{RoundError, RoundResult};
pub use hand::Hand;
pub use round::{InitialDeal, Outcome, Round, RoundPhase};
pub use strategy::{Advice, suggest};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let card = Card::new(Suit::Spades, Rank::Ace);
        assert_eq!(card.value(), 11);

        let mut deck = Deck::shuffled(42);
        assert!(deck.draw().is_some());

        let hand = Hand::new();
        assert_eq!(hand.value(), 0);

        let _advice = Advice::Stand;
    }
}
