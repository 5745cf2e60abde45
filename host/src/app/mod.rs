//! # App 模块
//!
//! 游戏驱动层：把牌局状态机与牌桌动画连接起来。
//!
//! ## 职责划分
//!
//! - 玩家/庄家的行动入口：调用 runtime 改变牌局，再触发对应动画
//! - 监听牌桌事件：动画完成后推动阶段自动前进（翻底牌、结算、收牌）
//! - 庄家策略不在此层：何时要牌由调用方（UI 或演示脚本）决定

use tracing::{error, info};

use blackjack_runtime::{
    strategy, Advice, Card, Deck, Outcome, Round, RoundPhase, RoundResult,
};

use crate::config::AnimationSettings;
use crate::table::{CardTable, Seat, TableEvent, TableLayout};

/// 游戏驱动
pub struct GameApp {
    round: Round,
    table: CardTable,
    outcome: Option<Outcome>,
}

impl GameApp {
    /// 用给定种子开始一局
    pub fn new(seed: u64, settings: AnimationSettings) -> Self {
        Self {
            round: Round::new(Deck::shuffled(seed)),
            table: CardTable::new(TableLayout::default(), settings),
            outcome: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn table(&self) -> &CardTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut CardTable {
        &mut self.table
    }

    /// 本局结果，结算前为 `None`
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// 没有动画在播放
    pub fn is_idle(&self) -> bool {
        !self.table.is_animating()
    }

    /// 发出首轮四张牌并播放发牌动画
    pub fn start_round(&mut self) -> RoundResult<()> {
        let deal = self.round.deal()?;
        info!(
            player = ?deal.player,
            upcard = %deal.dealer[1],
            "新的一局开始"
        );
        self.table.deal_initial(&deal);
        Ok(())
    }

    /// 玩家要牌
    pub fn player_hit(&mut self) -> RoundResult<Card> {
        let card = self.round.player_hit()?;
        info!(card = %card, value = self.round.player_hand().value(), "玩家要牌");
        self.table.animate_hit(Seat::Player, card);
        Ok(card)
    }

    /// 玩家停牌，立即开始翻庄家底牌
    pub fn player_stand(&mut self) -> RoundResult<()> {
        self.round.player_stand()?;
        info!(value = self.round.player_hand().value(), "玩家停牌");
        self.reveal_hole();
        Ok(())
    }

    /// 庄家要牌
    pub fn dealer_hit(&mut self) -> RoundResult<Card> {
        let card = self.round.dealer_hit()?;
        info!(card = %card, value = self.round.dealer_hand().value(), "庄家要牌");
        self.table.animate_hit(Seat::Dealer, card);
        Ok(card)
    }

    /// 庄家停牌
    pub fn dealer_stand(&mut self) -> RoundResult<()> {
        self.round.dealer_stand()?;
        info!(value = self.round.dealer_hand().value(), "庄家停牌");
        Ok(())
    }

    /// 玩家回合的基础策略建议
    pub fn advice(&self) -> Option<Advice> {
        if self.round.phase() == RoundPhase::PlayerTurn {
            Some(strategy::suggest(
                self.round.player_hand(),
                self.round.dealer_upcard(),
            ))
        } else {
            None
        }
    }

    /// 推进一帧并处理牌桌事件
    pub fn update_with(&mut self, dt: f32) -> Vec<TableEvent> {
        let events = self.table.update_with(dt);

        for event in &events {
            match event {
                TableEvent::DealFinished => {
                    // 玩家天生 21 点时发牌一结束就翻底牌
                    if self.round.phase() == RoundPhase::DealerReveal {
                        self.reveal_hole();
                    }
                }
                TableEvent::HitFinished(_)
                | TableEvent::RevealFinished
                | TableEvent::CollectFinished => {}
            }
        }

        // 进入结算阶段且动画全部播完时自动结算并收牌
        if self.round.phase() == RoundPhase::Settling
            && self.outcome.is_none()
            && !self.table.is_animating()
        {
            match self.round.settle() {
                Ok(outcome) => {
                    info!(?outcome, "本局结算");
                    self.outcome = Some(outcome);
                    self.table.collect_all();
                }
                Err(e) => error!(error = %e, "结算失败"),
            }
        }

        events
    }

    fn reveal_hole(&mut self) {
        match self.round.reveal() {
            Ok(hole) => {
                info!(card = %hole, "翻开庄家底牌");
                self.table.animate_reveal(hole);
            }
            Err(e) => error!(error = %e, "翻底牌失败"),
        }
    }
}
