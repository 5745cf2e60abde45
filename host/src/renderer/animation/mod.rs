//! # Animation 系统
//!
//! 关键帧动画引擎：缓动函数、单动画实例、组合效果与逐帧调度器。
//!
//! ## 模块划分
//!
//! - [`easing`]: 进度值的缓动映射
//! - [`transform`]: 二维向量与线性插值
//! - [`effect`]: 每帧如何改写精灵状态
//! - [`animation`]: 单个动画的时序与生命周期
//! - [`scheduler`]: 动画集合的逐帧推进与清理

pub mod animation;
pub mod easing;
pub mod effect;
pub mod scheduler;
pub mod transform;

pub use animation::{Animation, AnimationConfig, AnimationId, AnimationState};
pub use easing::EaseType;
pub use effect::{ComboEffects, Effect};
pub use scheduler::AnimationScheduler;
pub use transform::Vec2;
