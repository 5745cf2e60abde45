//! # Effect 模块
//!
//! 动画效果：描述每帧如何根据缓动后的进度改写精灵状态。
//!
//! ## 设计说明
//!
//! `apply` 是纯粹的状态插值，可以被任意次调用（包括重复调用同一
//! 进度值）；`finish` 只在动画完成的那一帧调用一次，承载不可重入的
//! 副作用（目前只有翻牌的正反面切换）。

use crate::renderer::card_sprite::CardSprite;

use super::transform::{lerp, Vec2};

/// 组合效果的各通道
///
/// 每个通道独立可选，未设置的通道不被动画触碰。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComboEffects {
    /// 位移：起点与终点
    pub slide: Option<(Vec2, Vec2)>,
    /// 缩放：起始与结束倍率
    pub scale: Option<(f32, f32)>,
    /// 旋转：起始与结束角度（度）
    pub rotation: Option<(f32, f32)>,
    /// 淡入淡出：起始与结束不透明度
    pub fade: Option<(f32, f32)>,
    /// 翻牌：`true` 翻向背面，`false` 翻向正面
    pub flip: Option<bool>,
}

impl ComboEffects {
    /// 是否没有任何通道被设置
    pub fn is_empty(&self) -> bool {
        self.slide.is_none()
            && self.scale.is_none()
            && self.rotation.is_none()
            && self.fade.is_none()
            && self.flip.is_none()
    }
}

/// 动画效果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// 从 `from` 滑动到 `to`
    Slide { from: Vec2, to: Vec2 },
    /// 缩放倍率从 `from` 到 `to`
    Scale { from: f32, to: f32 },
    /// 旋转角度从 `from` 到 `to`
    Rotate { from: f32, to: f32 },
    /// 不透明度从 `from` 到 `to`
    Fade { from: f32, to: f32 },
    /// 翻牌
    Flip { to_back: bool },
    /// 弹跳高亮：正弦垂直偏移，结束时回到原位
    Bounce { height: f32 },
    /// 多通道组合
    Combo(ComboEffects),
}

impl Effect {
    /// 按缓动后的进度改写精灵状态
    pub fn apply(&self, sprite: &CardSprite, eased: f32) {
        match *self {
            Effect::Slide { from, to } => {
                sprite.set_position(from.lerp(to, eased));
            }
            Effect::Scale { from, to } => {
                sprite.set_scale(lerp(from, to, eased));
            }
            Effect::Rotate { from, to } => {
                sprite.set_rotation(lerp(from, to, eased));
            }
            Effect::Fade { from, to } => {
                sprite.set_alpha(lerp(from, to, eased));
            }
            Effect::Flip { to_back } => {
                sprite.set_flip_progress(flip_progress(to_back, eased));
            }
            Effect::Bounce { height } => {
                // sin 在 0 和 π 处为零，偏移自然回到原位
                let t = eased.clamp(0.0, 1.0);
                sprite.set_y_offset(-height * (t * std::f32::consts::PI).sin());
            }
            Effect::Combo(ref combo) => {
                if let Some((from, to)) = combo.slide {
                    sprite.set_position(from.lerp(to, eased));
                }
                if let Some((from, to)) = combo.scale {
                    sprite.set_scale(lerp(from, to, eased));
                }
                if let Some((from, to)) = combo.rotation {
                    sprite.set_rotation(lerp(from, to, eased));
                }
                if let Some((from, to)) = combo.fade {
                    sprite.set_alpha(lerp(from, to, eased));
                }
                if let Some(to_back) = combo.flip {
                    sprite.set_flip_progress(flip_progress(to_back, eased));
                }
            }
        }
    }

    /// 动画完成时调用一次
    ///
    /// 翻牌在此处切换逻辑正反面，保证切换恰好发生一次。
    pub fn finish(&self, sprite: &CardSprite) {
        match *self {
            Effect::Flip { to_back } => {
                sprite.set_face_up(!to_back);
            }
            Effect::Combo(ref combo) => {
                if let Some(to_back) = combo.flip {
                    sprite.set_face_up(!to_back);
                }
            }
            _ => {}
        }
    }
}

/// 翻转进度：翻向背面时从 0 到 1，翻向正面时从 1 到 0
fn flip_progress(to_back: bool, eased: f32) -> f32 {
    if to_back { eased } else { 1.0 - eased }
}
