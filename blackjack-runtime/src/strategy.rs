//! # Strategy 模块
//!
//! 简化的基本策略建议。
//!
//! 只给出「要牌 / 停牌」两种建议；分牌和加倍不在范围内。

use crate::card::Card;
use crate::hand::Hand;
use serde::{Deserialize, Serialize};

/// 行动建议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advice {
    /// 要牌
    Hit,
    /// 停牌
    Stand,
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advice::Hit => write!(f, "Hit"),
            Advice::Stand => write!(f, "Stand"),
        }
    }
}

/// 根据玩家手牌和庄家明牌给出建议
///
/// 规则（简化基本策略）：
/// - 软手牌：19+ 停牌；软 18 对庄家 2-8 停牌，否则要牌；其余要牌
/// - 硬手牌：17+ 停牌；13-16 对庄家 2-6 停牌；12 对庄家 4-6 停牌；其余要牌
///
/// 庄家明牌未知（尚未发牌）时保守地返回停牌。
pub fn suggest(player_hand: &Hand, dealer_upcard: Option<Card>) -> Advice {
    let Some(upcard) = dealer_upcard else {
        return Advice::Stand;
    };

    let player_total = player_hand.value();
    let dealer_val = upcard.value();

    if player_hand.is_soft() {
        if player_total >= 19 {
            Advice::Stand
        } else if player_total == 18 {
            if (2..=8).contains(&dealer_val) {
                Advice::Stand
            } else {
                Advice::Hit
            }
        } else {
            Advice::Hit
        }
    } else if player_total >= 17 {
        Advice::Stand
    } else if (13..=16).contains(&player_total) {
        if (2..=6).contains(&dealer_val) {
            Advice::Stand
        } else {
            Advice::Hit
        }
    } else if player_total == 12 {
        if (4..=6).contains(&dealer_val) {
            Advice::Stand
        } else {
            Advice::Hit
        }
    } else {
        Advice::Hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    fn hand(ranks: &[Rank]) -> Hand {
        let mut h = Hand::new();
        for &r in ranks {
            h.push(card(r));
        }
        h
    }

    #[test]
    fn test_no_upcard_stands() {
        assert_eq!(suggest(&hand(&[Rank::Five, Rank::Five]), None), Advice::Stand);
    }

    #[test]
    fn test_hard_totals() {
        // 17+ 停牌
        assert_eq!(
            suggest(&hand(&[Rank::Ten, Rank::Seven]), Some(card(Rank::Ace))),
            Advice::Stand
        );

        // 13-16 对庄家小牌停牌，对大牌要牌
        let sixteen = hand(&[Rank::Ten, Rank::Six]);
        assert_eq!(suggest(&sixteen, Some(card(Rank::Six))), Advice::Stand);
        assert_eq!(suggest(&sixteen, Some(card(Rank::Seven))), Advice::Hit);

        // 12 只对庄家 4-6 停牌
        let twelve = hand(&[Rank::Ten, Rank::Two]);
        assert_eq!(suggest(&twelve, Some(card(Rank::Four))), Advice::Stand);
        assert_eq!(suggest(&twelve, Some(card(Rank::Six))), Advice::Stand);
        assert_eq!(suggest(&twelve, Some(card(Rank::Two))), Advice::Hit);
        assert_eq!(suggest(&twelve, Some(card(Rank::Seven))), Advice::Hit);

        // 11 以下总是要牌
        assert_eq!(
            suggest(&hand(&[Rank::Five, Rank::Six]), Some(card(Rank::Six))),
            Advice::Hit
        );
    }

    #[test]
    fn test_soft_totals() {
        // 软 19 停牌
        assert_eq!(
            suggest(&hand(&[Rank::Ace, Rank::Eight]), Some(card(Rank::Ten))),
            Advice::Stand
        );

        // 软 18 对 2-8 停牌，对 9+ 要牌
        let soft18 = hand(&[Rank::Ace, Rank::Seven]);
        assert_eq!(suggest(&soft18, Some(card(Rank::Two))), Advice::Stand);
        assert_eq!(suggest(&soft18, Some(card(Rank::Eight))), Advice::Stand);
        assert_eq!(suggest(&soft18, Some(card(Rank::Nine))), Advice::Hit);
        assert_eq!(suggest(&soft18, Some(card(Rank::Ace))), Advice::Hit);

        // 软 17 以下要牌
        assert_eq!(
            suggest(&hand(&[Rank::Ace, Rank::Six]), Some(card(Rank::Two))),
            Advice::Hit
        );
    }

    #[test]
    fn test_hard_hand_after_ace_demotion() {
        // A+6+9 = 硬 16，应按硬手牌处理
        let h = hand(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(suggest(&h, Some(card(Rank::Six))), Advice::Stand);
        assert_eq!(suggest(&h, Some(card(Rank::Ten))), Advice::Hit);
    }
}
