//! # Hand 模块
//!
//! 手牌与 21 点点数计算。
//!
//! A 先按 11 计；总点数超过 21 时逐张降为 1，直到不爆牌或没有可降的 A。

use crate::card::Card;
use serde::{Deserialize, Serialize};

/// 手牌
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// 创建空手牌
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一张牌
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 手牌数量
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 手牌切片
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 计算点数与仍按 11 计的 A 数量
    fn value_and_soft_aces(&self) -> (u32, u32) {
        let mut value: u32 = 0;
        let mut aces: u32 = 0;
        for card in &self.cards {
            value += card.value();
            if card.is_ace() {
                aces += 1;
            }
        }
        while value > 21 && aces > 0 {
            value -= 10;
            aces -= 1;
        }
        (value, aces)
    }

    /// 最优点数（A 自动降为 1 以避免爆牌）
    pub fn value(&self) -> u32 {
        self.value_and_soft_aces().0
    }

    /// 是否为软手牌（仍有 A 按 11 计）
    pub fn is_soft(&self) -> bool {
        self.value_and_soft_aces().1 > 0
    }

    /// 是否爆牌
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// 是否为天生 21 点（首两张即 21）
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn hand(ranks: &[Rank]) -> Hand {
        let mut h = Hand::new();
        for &r in ranks {
            h.push(card(r));
        }
        h
    }

    #[test]
    fn test_simple_values() {
        assert_eq!(hand(&[Rank::Two, Rank::Three]).value(), 5);
        assert_eq!(hand(&[Rank::King, Rank::Queen]).value(), 20);
        assert_eq!(hand(&[Rank::Ten, Rank::Seven, Rank::Four]).value(), 21);
    }

    #[test]
    fn test_ace_counts_as_eleven() {
        let h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());
    }

    #[test]
    fn test_ace_demotes_to_one() {
        let h = hand(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(h.value(), 16);
        assert!(!h.is_soft());
    }

    #[test]
    fn test_multiple_aces() {
        // A + A = 12（一张 11，一张 1）
        let h = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(h.value(), 12);
        assert!(h.is_soft());

        // A + A + 9 = 21
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);

        // A + A + A + 10 = 13
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ten]).value(),
            13
        );
    }

    #[test]
    fn test_bust() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(h.value(), 25);
        assert!(h.is_bust());
    }

    #[test]
    fn test_blackjack() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(!hand(&[Rank::Ten, Rank::Ten]).is_blackjack());
        // 三张凑 21 不是天生 21 点
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
    }
}
