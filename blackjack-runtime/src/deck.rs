//! # Deck 模块
//!
//! 52 张标准牌堆与洗牌。
//!
//! ## 设计说明
//!
//! Runtime 不依赖系统时钟或外部随机源：洗牌使用显式种子，
//! 同一种子总是产生同一副牌序。随机性来源（时间戳、OS 熵等）
//! 由宿主层决定并通过种子传入。

use crate::card::{Card, Rank, Suit};

/// SplitMix64 伪随机数生成器
///
/// 只用于洗牌，不用于任何密码学用途。
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// 生成 [0, bound) 范围内的索引
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// 牌堆
///
/// 管理一副 52 张的牌，从顶部（Vec 尾部）发牌。
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 创建未洗牌的完整牌堆（4 花色 × 13 点数）
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// 从给定牌序创建牌堆（`draw()` 从 Vec 尾部取牌）
    ///
    /// 主要用于测试中构造确定的发牌顺序。
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// 创建并用给定种子洗牌
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(seed);
        deck
    }

    /// Fisher–Yates 洗牌
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = SplitMix64::new(seed);
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_below(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// 发出顶部的一张牌
    ///
    /// 牌堆为空时返回 `None`。
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 剩余牌数
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// 牌堆是否为空
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ordered_deck_has_52_unique_cards() {
        let deck = Deck::ordered();
        assert_eq!(deck.remaining(), 52);

        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a = Deck::shuffled(42);
        let mut b = Deck::shuffled(42);

        for _ in 0..52 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Deck::shuffled(1);
        let b = Deck::shuffled(2);

        // 两个种子完全一致的概率可以忽略
        assert_ne!(a.cards, b.cards);
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let deck = Deck::shuffled(7);
        let unique: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::shuffled(3);
        for _ in 0..52 {
            assert!(deck.draw().is_some());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
