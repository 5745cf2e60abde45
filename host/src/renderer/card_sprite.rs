//! # CardSprite 模块
//!
//! 卡牌的可动画渲染状态。
//!
//! ## 设计说明
//!
//! 渲染状态放在 `Rc<RefCell<...>>` 中，`CardSprite` 克隆后共享同一份
//! 状态。动画系统持有 sprite 的克隆作为目标，对状态的写入立即对
//! 桌面协调层可见。

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use blackjack_runtime::Card;

use super::animation::transform::Vec2;

/// 卡牌渲染状态
///
/// 动画每帧写入的全部可插值属性。
#[derive(Debug, Clone, PartialEq)]
pub struct CardRenderState {
    /// 桌面坐标（卡牌中心）
    pub position: Vec2,
    /// 旋转角度（度，顺时针）
    pub rotation: f32,
    /// 缩放倍率（1.0 为原始大小）
    pub scale: f32,
    /// 不透明度 [0,1]
    pub alpha: f32,
    /// 翻转进度：0 为完全正面，0.5 为侧棱，1 为完全背面
    pub flip_progress: f32,
    /// 弹跳等效果产生的垂直偏移
    pub y_offset: f32,
    /// 是否正面朝上
    pub face_up: bool,
    /// 是否参与渲染
    pub visible: bool,
}

impl Default for CardRenderState {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            rotation: 0.0,
            scale: 1.0,
            alpha: 1.0,
            flip_progress: 0.0,
            y_offset: 0.0,
            face_up: true,
            visible: true,
        }
    }
}

/// 卡牌精灵
///
/// 绑定一张逻辑牌与其渲染状态，克隆共享状态。
#[derive(Clone)]
pub struct CardSprite {
    card: Card,
    state: Rc<RefCell<CardRenderState>>,
}

impl CardSprite {
    /// 在给定位置创建精灵
    pub fn new(card: Card, position: Vec2) -> Self {
        let state = CardRenderState {
            position,
            ..CardRenderState::default()
        };
        Self {
            card,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// 创建背面朝上的精灵（用于庄家底牌）
    pub fn new_face_down(card: Card, position: Vec2) -> Self {
        let sprite = Self::new(card, position);
        {
            let mut state = sprite.state.borrow_mut();
            state.face_up = false;
            state.flip_progress = 1.0;
        }
        sprite
    }

    /// 对应的逻辑牌
    pub fn card(&self) -> Card {
        self.card
    }

    /// 读取当前状态的快照
    pub fn snapshot(&self) -> CardRenderState {
        self.state.borrow().clone()
    }

    pub fn position(&self) -> Vec2 {
        self.state.borrow().position
    }

    pub fn set_position(&self, position: Vec2) {
        self.state.borrow_mut().position = position;
    }

    pub fn rotation(&self) -> f32 {
        self.state.borrow().rotation
    }

    pub fn set_rotation(&self, rotation: f32) {
        self.state.borrow_mut().rotation = rotation;
    }

    pub fn scale(&self) -> f32 {
        self.state.borrow().scale
    }

    pub fn set_scale(&self, scale: f32) {
        self.state.borrow_mut().scale = scale;
    }

    pub fn alpha(&self) -> f32 {
        self.state.borrow().alpha
    }

    /// 设置不透明度，clamp 到 [0,1]
    ///
    /// alpha 为 0 时同时标记为不可见。
    pub fn set_alpha(&self, alpha: f32) {
        let mut state = self.state.borrow_mut();
        state.alpha = alpha.clamp(0.0, 1.0);
        state.visible = state.alpha > 0.0;
    }

    pub fn flip_progress(&self) -> f32 {
        self.state.borrow().flip_progress
    }

    pub fn set_flip_progress(&self, progress: f32) {
        self.state.borrow_mut().flip_progress = progress.clamp(0.0, 1.0);
    }

    pub fn y_offset(&self) -> f32 {
        self.state.borrow().y_offset
    }

    pub fn set_y_offset(&self, offset: f32) {
        self.state.borrow_mut().y_offset = offset;
    }

    pub fn is_face_up(&self) -> bool {
        self.state.borrow().face_up
    }

    pub fn set_face_up(&self, face_up: bool) {
        self.state.borrow_mut().face_up = face_up;
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}

impl fmt::Debug for CardSprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSprite")
            .field("card", &self.card)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
