//! # Easing 模块
//!
//! 缓动函数：把线性进度 [0,1] 映射为带节奏感的输出值。
//!
//! ## 说明
//!
//! 输出不保证落在 [0,1] 内：`ElasticOut` 和 `BackOut` 会短暂越界，
//! 用于过冲效果。输入在计算前统一 clamp 到 [0,1]。

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// 缓动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseType {
    /// 线性
    #[default]
    Linear,
    /// 加速进入
    EaseIn,
    /// 减速退出
    EaseOut,
    /// 平滑进出
    EaseInOut,
    /// 弹跳进入
    BounceIn,
    /// 弹跳落地
    BounceOut,
    /// 弹性回摆
    ElasticOut,
    /// 回拉过冲
    BackOut,
}

impl EaseType {
    /// 应用缓动函数
    ///
    /// 输入先 clamp 到 [0,1]。
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EaseType::Linear => t,
            EaseType::EaseIn => t * t,
            EaseType::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EaseType::EaseInOut => t * t * (3.0 - 2.0 * t),
            EaseType::BounceIn => 1.0 - bounce_out(1.0 - t),
            EaseType::BounceOut => bounce_out(t),
            EaseType::ElasticOut => elastic_out(t),
            EaseType::BackOut => back_out(t),
        }
    }

    /// 按名字解析缓动类型
    ///
    /// 未知名字回退为 `Linear`，保证配置文件写错时动画仍能播放。
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => EaseType::Linear,
            "ease_in" => EaseType::EaseIn,
            "ease_out" => EaseType::EaseOut,
            "ease_in_out" => EaseType::EaseInOut,
            "bounce_in" => EaseType::BounceIn,
            "bounce_out" => EaseType::BounceOut,
            "elastic_out" => EaseType::ElasticOut,
            "back_out" => EaseType::BackOut,
            other => {
                tracing::warn!("未知缓动名称 '{}', 回退为 linear", other);
                EaseType::Linear
            }
        }
    }
}

/// 四段抛物线弹跳
fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    if t < 1.0 / 2.75 {
        N * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        N * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        N * t * t + 0.984375
    }
}

/// 指数衰减正弦振荡
fn elastic_out(t: f32) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let p = 0.4;
    2.0_f32.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
}

/// 带过冲的三次回拉
fn back_out(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}
