//! # Scheduler 模块
//!
//! 动画调度器：集中管理活跃动画，每帧推进并清理。
//!
//! ## 设计说明
//!
//! `update()` 从内部时钟取实际帧间隔，用于交互式宿主；
//! `update_with(dt)` 接受外部 dt，用于测试和离线回放。
//! 两者共用同一推进逻辑，行为完全一致。

use std::time::Instant;

use tracing::debug;

use super::animation::{Animation, AnimationId, AnimationState};

/// 动画调度器
pub struct AnimationScheduler {
    animations: Vec<Animation>,
    next_id: u64,
    paused: bool,
    last_update: Instant,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
            next_id: 1,
            paused: false,
            last_update: Instant::now(),
        }
    }

    /// 注册并启动动画，返回句柄
    pub fn add(&mut self, mut animation: Animation) -> AnimationId {
        let id = AnimationId::new(self.next_id);
        self.next_id += 1;

        animation.assign_id(id);
        animation.start();
        debug!(?id, card = %animation.target().card(), "注册动画");
        self.animations.push(animation);
        id
    }

    /// 直接移除动画，不触发任何回调
    pub fn remove(&mut self, id: AnimationId) {
        self.animations.retain(|a| a.id() != id);
    }

    /// 取消动画
    ///
    /// 动画在下一帧 update 时被清理，完成回调不触发。
    pub fn cancel(&mut self, id: AnimationId) {
        if let Some(animation) = self.animations.iter_mut().find(|a| a.id() == id) {
            animation.cancel();
        }
    }

    /// 用内部时钟推进一帧
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        self.update_with(dt);
    }

    /// 用外部 dt 推进一帧
    pub fn update_with(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.animations.retain_mut(|animation| animation.update(dt));
    }

    /// 暂停推进，活跃动画原地冻结
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// 恢复推进
    ///
    /// 重置内部时钟，暂停期间的墙钟时间不会一次性补入。
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_update = Instant::now();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 取消并移除全部动画
    pub fn clear_all(&mut self) {
        for animation in &mut self.animations {
            animation.cancel();
        }
        self.animations.clear();
    }

    /// 正在播放（含延迟期）的动画数量
    pub fn active_count(&self) -> usize {
        self.animations
            .iter()
            .filter(|a| a.state() == AnimationState::Running)
            .count()
    }

    /// 是否还有动画未完成
    pub fn has_animations(&self) -> bool {
        self.active_count() > 0
    }

    /// 查询动画进度，已移除的返回 `None`
    pub fn progress(&self, id: AnimationId) -> Option<f32> {
        self.animations
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::animation::animation::AnimationConfig;
    use crate::renderer::animation::easing::EaseType;
    use crate::renderer::animation::effect::Effect;
    use crate::renderer::animation::transform::Vec2;
    use crate::renderer::card_sprite::CardSprite;
    use blackjack_runtime::{Card, Rank, Suit};
    use std::cell::Cell;
    use std::rc::Rc;

    fn sprite() -> CardSprite {
        CardSprite::new(Card::new(Suit::Spades, Rank::Nine), Vec2::zero())
    }

    fn slide(target: CardSprite, duration: f32) -> Animation {
        Animation::new(
            target,
            Effect::Slide {
                from: Vec2::zero(),
                to: Vec2::new(100.0, 0.0),
            },
            AnimationConfig::default()
                .with_duration(duration)
                .with_ease(EaseType::Linear),
        )
    }

    #[test]
    fn test_ids_are_unique() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add(slide(sprite(), 1.0));
        let b = scheduler.add(slide(sprite(), 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_completed_animations_are_removed() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(slide(sprite(), 0.5));
        assert_eq!(scheduler.active_count(), 1);

        scheduler.update_with(1.0);
        assert_eq!(scheduler.active_count(), 0);
        assert!(!scheduler.has_animations());
        assert_eq!(scheduler.progress(id), None);
    }

    #[test]
    fn test_pause_freezes_resume_continues() {
        let s = sprite();
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(slide(s.clone(), 1.0));

        scheduler.update_with(0.25);
        assert_eq!(s.position().x, 25.0);

        scheduler.pause();
        scheduler.update_with(10.0);
        // 暂停期间状态完全冻结
        assert_eq!(s.position().x, 25.0);
        assert!(scheduler.has_animations());

        scheduler.resume();
        scheduler.update_with(0.25);
        assert_eq!(s.position().x, 50.0);
    }

    #[test]
    fn test_cancel_removes_without_callback() {
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();

        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(slide(sprite(), 1.0).on_complete(move || f.set(true)));

        scheduler.update_with(0.3);
        scheduler.cancel(id);
        scheduler.update_with(0.1);

        assert!(!fired.get());
        assert_eq!(scheduler.progress(id), None);
    }

    #[test]
    fn test_clear_all() {
        let fired = Rc::new(Cell::new(0));
        let mut scheduler = AnimationScheduler::new();
        for _ in 0..3 {
            let f = fired.clone();
            scheduler.add(slide(sprite(), 1.0).on_complete(move || f.set(f.get() + 1)));
        }

        scheduler.clear_all();
        scheduler.update_with(10.0);

        assert_eq!(fired.get(), 0);
        assert!(!scheduler.has_animations());
    }

    #[test]
    fn test_progress_query() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add(slide(sprite(), 1.0));

        scheduler.update_with(0.4);
        let p = scheduler.progress(id).unwrap();
        assert!((p - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_staggered_delays_resolve_in_order() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut scheduler = AnimationScheduler::new();

        for i in 0..3 {
            let o = order.clone();
            let anim = Animation::new(
                sprite(),
                Effect::Fade { from: 0.0, to: 1.0 },
                AnimationConfig::default()
                    .with_duration(0.2)
                    .with_delay(i as f32 * 0.15),
            )
            .on_complete(move || o.borrow_mut().push(i));
            scheduler.add(anim);
        }

        // 以 60fps 固定步长推进到所有动画结束
        for _ in 0..60 {
            scheduler.update_with(1.0 / 60.0);
        }

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(!scheduler.has_animations());
    }
}
