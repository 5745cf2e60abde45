//! # Table 模块
//!
//! 牌桌协调层：把牌局事件翻译成精灵与动画，把动画完成翻译回
//! 牌桌事件。
//!
//! ## 设计说明
//!
//! 动画回调拿不到调度器的可变引用，完成信号通过共享事件队列
//! 延迟一帧交付：回调只向 `Rc<RefCell<Vec<TableEvent>>>` 推入事件，
//! `update_with` 在推进动画之后统一排空队列返回给上层。
//! 多张牌的批量动作（发牌、收牌）用共享计数器归零时机发出
//! 单个聚合事件。

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use blackjack_runtime::{Card, InitialDeal};

use crate::config::AnimationSettings;
use crate::renderer::animation::{AnimationScheduler, Vec2};
use crate::renderer::card_sprite::CardSprite;
use crate::renderer::presets;

/// 牌桌座位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Dealer,
}

/// 牌桌布局坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    /// 牌堆位置（发牌起点）
    pub deck_pos: Vec2,
    /// 弃牌堆位置（收牌终点）
    pub discard_pos: Vec2,
    /// 玩家第一张牌的中心
    pub player_anchor: Vec2,
    /// 庄家第一张牌的中心
    pub dealer_anchor: Vec2,
    /// 同一手牌中相邻两张的水平间距
    pub card_spacing: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            deck_pos: Vec2::new(700.0, 80.0),
            discard_pos: Vec2::new(60.0, 80.0),
            player_anchor: Vec2::new(280.0, 480.0),
            dealer_anchor: Vec2::new(280.0, 140.0),
            card_spacing: 90.0,
        }
    }
}

impl TableLayout {
    /// 某座位第 `index` 张牌的落点
    pub fn slot(&self, seat: Seat, index: usize) -> Vec2 {
        let anchor = match seat {
            Seat::Player => self.player_anchor,
            Seat::Dealer => self.dealer_anchor,
        };
        Vec2::new(anchor.x + index as f32 * self.card_spacing, anchor.y)
    }
}

/// 牌桌事件
///
/// 动画完成后经 `update_with` 交付给上层。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// 初始四张牌全部到位
    DealFinished,
    /// 某座位的要牌动画结束
    HitFinished(Seat),
    /// 庄家底牌翻开完毕
    RevealFinished,
    /// 所有牌收入弃牌堆
    CollectFinished,
}

/// 牌桌协调器
pub struct CardTable {
    scheduler: AnimationScheduler,
    sprites: HashMap<Card, CardSprite>,
    hand_counts: HashMap<Seat, usize>,
    layout: TableLayout,
    settings: AnimationSettings,
    events: Rc<RefCell<Vec<TableEvent>>>,
    animations_enabled: bool,
}

impl CardTable {
    pub fn new(layout: TableLayout, settings: AnimationSettings) -> Self {
        Self {
            scheduler: AnimationScheduler::new(),
            sprites: HashMap::new(),
            hand_counts: HashMap::new(),
            layout,
            settings,
            events: Rc::new(RefCell::new(Vec::new())),
            animations_enabled: true,
        }
    }

    /// 关闭动画后所有动作立即到位并同帧发出事件
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn sprite(&self, card: Card) -> Option<&CardSprite> {
        self.sprites.get(&card)
    }

    pub fn sprites(&self) -> impl Iterator<Item = &CardSprite> {
        self.sprites.values()
    }

    fn push_event(events: &Rc<RefCell<Vec<TableEvent>>>, event: TableEvent) {
        events.borrow_mut().push(event);
    }

    fn next_index(&mut self, seat: Seat) -> usize {
        let count = self.hand_counts.entry(seat).or_insert(0);
        let index = *count;
        *count += 1;
        index
    }

    /// 播放初始发牌：玩家、庄家交替各两张，庄家第一张背面朝上
    pub fn deal_initial(&mut self, deal: &InitialDeal) {
        self.hand_counts.clear();

        // 发牌顺序与牌局一致：玩家、庄家（底牌）、玩家、庄家（明牌）
        let order = [
            (Seat::Player, deal.player[0], true),
            (Seat::Dealer, deal.dealer[0], false),
            (Seat::Player, deal.player[1], true),
            (Seat::Dealer, deal.dealer[1], true),
        ];

        if !self.animations_enabled {
            for (seat, card, face_up) in order {
                let index = self.next_index(seat);
                let sprite = if face_up {
                    CardSprite::new(card, self.layout.slot(seat, index))
                } else {
                    CardSprite::new_face_down(card, self.layout.slot(seat, index))
                };
                self.sprites.insert(card, sprite);
            }
            Self::push_event(&self.events, TableEvent::DealFinished);
            return;
        }

        let pending = Rc::new(Cell::new(order.len()));
        for (i, (seat, card, face_up)) in order.into_iter().enumerate() {
            let index = self.next_index(seat);
            let sprite = if face_up {
                CardSprite::new(card, self.layout.deck_pos)
            } else {
                CardSprite::new_face_down(card, self.layout.deck_pos)
            };
            self.sprites.insert(card, sprite.clone());

            let delay = i as f32 * self.settings.deal.delay_between_cards;
            let events = self.events.clone();
            let pending = pending.clone();
            let animation = presets::deal_animation(
                sprite,
                self.layout.deck_pos,
                self.layout.slot(seat, index),
                delay,
                &self.settings.deal,
            )
            .on_complete(move || {
                pending.set(pending.get() - 1);
                if pending.get() == 0 {
                    Self::push_event(&events, TableEvent::DealFinished);
                }
            });
            self.scheduler.add(animation);
        }
        debug!("初始发牌动画已注册");
    }

    /// 播放要牌：新牌从牌堆滑入该座位的下一个空位
    pub fn animate_hit(&mut self, seat: Seat, card: Card) {
        let index = self.next_index(seat);
        let to = self.layout.slot(seat, index);

        if !self.animations_enabled {
            self.sprites.insert(card, CardSprite::new(card, to));
            Self::push_event(&self.events, TableEvent::HitFinished(seat));
            return;
        }

        let sprite = CardSprite::new(card, self.layout.deck_pos);
        self.sprites.insert(card, sprite.clone());

        let events = self.events.clone();
        let animation =
            presets::hit_animation(sprite, self.layout.deck_pos, to, &self.settings.hit)
                .on_complete(move || {
                    Self::push_event(&events, TableEvent::HitFinished(seat));
                });
        self.scheduler.add(animation);
    }

    /// 播放庄家底牌翻开
    pub fn animate_reveal(&mut self, hole_card: Card) {
        let Some(sprite) = self.sprites.get(&hole_card).cloned() else {
            warn!(card = %hole_card, "底牌精灵不存在，跳过翻牌动画");
            Self::push_event(&self.events, TableEvent::RevealFinished);
            return;
        };

        if !self.animations_enabled {
            sprite.set_face_up(true);
            sprite.set_flip_progress(0.0);
            Self::push_event(&self.events, TableEvent::RevealFinished);
            return;
        }

        let events = self.events.clone();
        let animation = presets::flip_reveal_animation(sprite, &self.settings.flip)
            .on_complete(move || {
                Self::push_event(&events, TableEvent::RevealFinished);
            });
        self.scheduler.add(animation);
    }

    /// 高亮一张牌（弹跳动画）
    pub fn highlight(&mut self, card: Card) {
        if !self.animations_enabled {
            return;
        }
        let Some(sprite) = self.sprites.get(&card).cloned() else {
            warn!(card = %card, "精灵不存在，跳过高亮");
            return;
        };
        self.scheduler
            .add(presets::bounce_highlight_animation(sprite, &self.settings.bounce));
    }

    /// 收走所有牌到弃牌堆
    ///
    /// 桌面为空时直接发出 `CollectFinished`。
    pub fn collect_all(&mut self) {
        self.hand_counts.clear();

        if self.sprites.is_empty() || !self.animations_enabled {
            self.sprites.clear();
            Self::push_event(&self.events, TableEvent::CollectFinished);
            return;
        }

        let pending = Rc::new(Cell::new(self.sprites.len()));
        for (i, sprite) in self.sprites.values().cloned().enumerate() {
            let delay = i as f32 * 0.05;
            let events = self.events.clone();
            let pending = pending.clone();
            let animation = presets::collect_animation(
                sprite,
                self.layout.discard_pos,
                delay,
                &self.settings.collect,
            )
            .on_complete(move || {
                pending.set(pending.get() - 1);
                if pending.get() == 0 {
                    Self::push_event(&events, TableEvent::CollectFinished);
                }
            });
            self.scheduler.add(animation);
        }
    }

    /// 推进一帧并返回本帧产生的事件
    pub fn update_with(&mut self, dt: f32) -> Vec<TableEvent> {
        self.scheduler.update_with(dt);
        let events: Vec<TableEvent> = self.events.borrow_mut().drain(..).collect();

        if events.contains(&TableEvent::CollectFinished) {
            self.sprites.clear();
        }
        events
    }

    /// 用内部时钟推进一帧
    pub fn update(&mut self) -> Vec<TableEvent> {
        self.scheduler.update();
        let events: Vec<TableEvent> = self.events.borrow_mut().drain(..).collect();
        if events.contains(&TableEvent::CollectFinished) {
            self.sprites.clear();
        }
        events
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_animations()
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub fn resume(&mut self) {
        self.scheduler.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    /// 取消所有动画并清空桌面
    pub fn clear(&mut self) {
        self.scheduler.clear_all();
        self.events.borrow_mut().clear();
        self.sprites.clear();
        self.hand_counts.clear();
    }
}
