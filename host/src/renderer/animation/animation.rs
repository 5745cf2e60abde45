//! # Animation 模块
//!
//! 单个动画实例：目标精灵 + 效果 + 时序配置 + 生命周期状态。
//!
//! ## 时序模型
//!
//! 动画不读系统时钟。`update(dt)` 累积调用方传入的帧间隔，
//! 同一 dt 序列总是产生同一帧序列，测试可以逐帧断言。
//! 延迟消耗采用结转语义：一帧 dt 超过剩余延迟时，多出的部分
//! 立即计入播放时间，不会丢失。

use std::fmt;

use tracing::warn;

use crate::renderer::card_sprite::CardSprite;

use super::easing::EaseType;
use super::effect::{ComboEffects, Effect};
use super::transform::Vec2;

/// 动画句柄
///
/// 由调度器在注册时分配，用于之后的查询与取消。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// 动画生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// 已创建，尚未启动
    Pending,
    /// 播放中（含延迟期）
    Running,
    /// 已正常完成
    Completed,
    /// 被取消，完成回调不会触发
    Cancelled,
}

/// 动画时序配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// 播放时长（秒）
    pub duration: f32,
    /// 启动延迟（秒）
    pub delay: f32,
    /// 缓动类型
    pub ease: EaseType,
    /// 是否循环播放
    pub looped: bool,
    /// 是否反向输出缓动值
    pub reverse: bool,
    /// 完成后是否自动从调度器移除
    pub auto_remove: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            delay: 0.0,
            ease: EaseType::EaseOut,
            looped: false,
            reverse: false,
            auto_remove: true,
        }
    }
}

impl AnimationConfig {
    /// 设置时长，负值按 0 处理
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// 设置延迟，负值按 0 处理
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_ease(mut self, ease: EaseType) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_auto_remove(mut self, auto_remove: bool) -> Self {
        self.auto_remove = auto_remove;
        self
    }
}

type CompleteCallback = Box<dyn FnOnce()>;
type UpdateCallback = Box<dyn FnMut(f32)>;

/// 动画实例
pub struct Animation {
    id: AnimationId,
    target: CardSprite,
    effect: Effect,
    config: AnimationConfig,
    state: AnimationState,
    remaining_delay: f32,
    elapsed: f32,
    progress: f32,
    complete_callbacks: Vec<CompleteCallback>,
    update_callbacks: Vec<UpdateCallback>,
}

impl Animation {
    /// 创建动画
    ///
    /// 句柄在加入调度器时才被分配。
    pub fn new(target: CardSprite, effect: Effect, config: AnimationConfig) -> Self {
        Self {
            id: AnimationId::new(0),
            target,
            effect,
            remaining_delay: config.delay,
            config,
            state: AnimationState::Pending,
            elapsed: 0.0,
            progress: 0.0,
            complete_callbacks: Vec::new(),
            update_callbacks: Vec::new(),
        }
    }

    /// 创建空的组合动画，之后用 `add_*` 填充通道
    pub fn combo(target: CardSprite, config: AnimationConfig) -> Self {
        Self::new(target, Effect::Combo(ComboEffects::default()), config)
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: AnimationId) {
        self.id = id;
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// 当前未缓动的进度 [0,1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> &CardSprite {
        &self.target
    }

    /// 注册完成回调，按注册顺序触发
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.complete_callbacks.push(Box::new(callback));
        self
    }

    /// 注册每帧回调，参数为缓动后的进度值
    pub fn on_update(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.update_callbacks.push(Box::new(callback));
        self
    }

    /// 向组合动画添加位移通道
    pub fn add_slide(mut self, from: Vec2, to: Vec2) -> Self {
        if let Effect::Combo(ref mut combo) = self.effect {
            combo.slide = Some((from, to));
        } else {
            warn!("add_slide 只对组合动画有效，已忽略");
        }
        self
    }

    /// 向组合动画添加缩放通道
    pub fn add_scale(mut self, from: f32, to: f32) -> Self {
        if let Effect::Combo(ref mut combo) = self.effect {
            combo.scale = Some((from, to));
        } else {
            warn!("add_scale 只对组合动画有效，已忽略");
        }
        self
    }

    /// 向组合动画添加旋转通道
    pub fn add_rotation(mut self, from: f32, to: f32) -> Self {
        if let Effect::Combo(ref mut combo) = self.effect {
            combo.rotation = Some((from, to));
        } else {
            warn!("add_rotation 只对组合动画有效，已忽略");
        }
        self
    }

    /// 向组合动画添加淡入淡出通道
    pub fn add_fade(mut self, from: f32, to: f32) -> Self {
        if let Effect::Combo(ref mut combo) = self.effect {
            combo.fade = Some((from, to));
        } else {
            warn!("add_fade 只对组合动画有效，已忽略");
        }
        self
    }

    /// 向组合动画添加翻牌通道
    pub fn add_flip(mut self, to_back: bool) -> Self {
        if let Effect::Combo(ref mut combo) = self.effect {
            combo.flip = Some(to_back);
        } else {
            warn!("add_flip 只对组合动画有效，已忽略");
        }
        self
    }

    /// 启动动画
    ///
    /// 只有 `Pending` 状态可以启动，重复启动记日志并忽略。
    pub fn start(&mut self) {
        if self.state == AnimationState::Pending {
            self.state = AnimationState::Running;
        } else {
            warn!(state = ?self.state, "动画已启动过，忽略重复 start");
        }
    }

    /// 取消动画
    ///
    /// 幂等；已完成的动画不受影响。被取消的动画不触发完成回调，
    /// 精灵停留在最后一次写入的状态。
    pub fn cancel(&mut self) {
        match self.state {
            AnimationState::Completed | AnimationState::Cancelled => {}
            _ => self.state = AnimationState::Cancelled,
        }
    }

    /// 推进动画
    ///
    /// 返回 `true` 表示动画应继续留在调度器中。
    pub fn update(&mut self, dt: f32) -> bool {
        match self.state {
            AnimationState::Pending | AnimationState::Cancelled => return false,
            AnimationState::Completed => return !self.config.auto_remove,
            AnimationState::Running => {}
        }

        let mut dt = dt.max(0.0);

        // 延迟结转：超出延迟的部分立即进入播放时间
        if self.remaining_delay > 0.0 {
            if dt < self.remaining_delay {
                self.remaining_delay -= dt;
                return true;
            }
            dt -= self.remaining_delay;
            self.remaining_delay = 0.0;
        }

        self.elapsed += dt;

        let raw = if self.config.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.config.duration
        };

        let completing = !self.config.looped && raw >= 1.0;
        self.progress = if self.config.looped {
            raw.fract()
        } else {
            raw.min(1.0)
        };

        let mut eased = self.config.ease.apply(self.progress);
        if self.config.reverse {
            eased = 1.0 - eased;
        }

        self.effect.apply(&self.target, eased);
        for callback in &mut self.update_callbacks {
            callback(eased);
        }

        if completing {
            self.effect.finish(&self.target);
            self.state = AnimationState::Completed;
            for callback in self.complete_callbacks.drain(..) {
                callback();
            }
            return !self.config.auto_remove;
        }

        true
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("id", &self.id)
            .field("card", &self.target.card())
            .field("effect", &self.effect)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}
