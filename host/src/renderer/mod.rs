//! # Renderer 模块
//!
//! 牌桌的视觉侧：精灵状态、动画系统与动画预设。
//! 不负责真正的绘制，只维护每帧可供绘制层读取的状态。

pub mod animation;
pub mod card_sprite;
pub mod presets;

pub use card_sprite::{CardRenderState, CardSprite};
