//! # Round 模块
//!
//! 一局牌局的阶段状态机。
//!
//! ```text
//! Dealing ──deal()──► PlayerTurn ──player_stand()──► DealerReveal
//!                         │                              │ reveal()
//!                         │ player_hit() 爆牌            ▼
//!                         └────────────► Settling ◄── DealerTurn
//!                                           │    dealer_stand() /
//!                                           │    dealer_hit() 爆牌
//!                                        settle()
//!                                           ▼
//!                                        Finished
//! ```
//!
//! ## 设计说明
//!
//! Runtime 只维护事实（手牌、阶段、结果），不做任何决策：
//! 玩家行动来自输入，庄家何时要牌由宿主层决定。
//! 下注、分牌、加倍与庄家停牌规则不在本 crate 范围内。

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{RoundError, RoundResult};
use crate::hand::Hand;

/// 牌局阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// 等待发牌
    Dealing,
    /// 玩家回合
    PlayerTurn,
    /// 等待翻开庄家暗牌
    DealerReveal,
    /// 庄家回合
    DealerTurn,
    /// 等待结算
    Settling,
    /// 已结束
    Finished,
}

impl RoundPhase {
    /// 阶段名称（用于错误信息和日志）
    pub fn name(&self) -> &'static str {
        match self {
            RoundPhase::Dealing => "Dealing",
            RoundPhase::PlayerTurn => "PlayerTurn",
            RoundPhase::DealerReveal => "DealerReveal",
            RoundPhase::DealerTurn => "DealerTurn",
            RoundPhase::Settling => "Settling",
            RoundPhase::Finished => "Finished",
        }
    }
}

/// 牌局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 玩家天生 21 点
    PlayerBlackjack,
    /// 玩家爆牌
    PlayerBust,
    /// 庄家爆牌
    DealerBust,
    /// 玩家点数更高
    PlayerWin,
    /// 庄家点数更高
    DealerWin,
    /// 平局
    Push,
}

/// 首轮发出的牌（玩家两张、庄家两张）
///
/// 庄家第一张是暗牌，第二张是明牌。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialDeal {
    pub player: [Card; 2],
    pub dealer: [Card; 2],
}

/// 一局牌局
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
    hole_revealed: bool,
}

impl Round {
    /// 用给定牌堆开始新的一局
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::Dealing,
            hole_revealed: false,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// 玩家手牌
    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// 庄家手牌
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// 庄家明牌（发牌后始终可见的第二张）
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().get(1).copied()
    }

    /// 庄家暗牌是否已翻开
    pub fn hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// 剩余牌数
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn expect_phase(&self, expected: RoundPhase) -> RoundResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::PhaseMismatch {
                expected: expected.name(),
                actual: self.phase.name(),
            })
        }
    }

    fn draw(&mut self) -> RoundResult<Card> {
        self.deck.draw().ok_or(RoundError::EmptyDeck)
    }

    /// 首轮发牌：玩家、庄家交替各两张
    ///
    /// 玩家天生 21 点时直接进入 [`RoundPhase::DealerReveal`]，
    /// 否则进入玩家回合。
    pub fn deal(&mut self) -> RoundResult<InitialDeal> {
        self.expect_phase(RoundPhase::Dealing)?;

        let p1 = self.draw()?;
        let d1 = self.draw()?;
        let p2 = self.draw()?;
        let d2 = self.draw()?;

        self.player.push(p1);
        self.player.push(p2);
        self.dealer.push(d1);
        self.dealer.push(d2);

        self.phase = if self.player.is_blackjack() {
            RoundPhase::DealerReveal
        } else {
            RoundPhase::PlayerTurn
        };

        Ok(InitialDeal {
            player: [p1, p2],
            dealer: [d1, d2],
        })
    }

    /// 玩家要牌
    ///
    /// 爆牌时直接进入结算阶段。
    pub fn player_hit(&mut self) -> RoundResult<Card> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        let card = self.draw()?;
        self.player.push(card);
        if self.player.is_bust() {
            self.phase = RoundPhase::Settling;
        }
        Ok(card)
    }

    /// 玩家停牌，转入翻牌阶段
    pub fn player_stand(&mut self) -> RoundResult<()> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        self.phase = RoundPhase::DealerReveal;
        Ok(())
    }

    /// 翻开庄家暗牌，返回暗牌
    pub fn reveal(&mut self) -> RoundResult<Card> {
        self.expect_phase(RoundPhase::DealerReveal)?;
        self.hole_revealed = true;
        self.phase = RoundPhase::DealerTurn;
        // 暗牌是发牌时庄家的第一张
        Ok(self.dealer.cards()[0])
    }

    /// 庄家要牌（何时要牌由宿主决定）
    ///
    /// 爆牌时直接进入结算阶段。
    pub fn dealer_hit(&mut self) -> RoundResult<Card> {
        self.expect_phase(RoundPhase::DealerTurn)?;
        let card = self.draw()?;
        self.dealer.push(card);
        if self.dealer.is_bust() {
            self.phase = RoundPhase::Settling;
        }
        Ok(card)
    }

    /// 庄家停牌，转入结算阶段
    pub fn dealer_stand(&mut self) -> RoundResult<()> {
        self.expect_phase(RoundPhase::DealerTurn)?;
        self.phase = RoundPhase::Settling;
        Ok(())
    }

    /// 结算本局
    pub fn settle(&mut self) -> RoundResult<Outcome> {
        self.expect_phase(RoundPhase::Settling)?;
        self.phase = RoundPhase::Finished;

        let outcome = if self.player.is_bust() {
            Outcome::PlayerBust
        } else if self.player.is_blackjack() && !self.dealer.is_blackjack() {
            Outcome::PlayerBlackjack
        } else if self.dealer.is_bust() {
            Outcome::DealerBust
        } else {
            let p = self.player.value();
            let d = self.dealer.value();
            if p > d {
                Outcome::PlayerWin
            } else if p < d {
                Outcome::DealerWin
            } else {
                Outcome::Push
            }
        };
        Ok(outcome)
    }
}
