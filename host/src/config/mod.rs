//! # Config 模块
//!
//! 动画参数配置：从 JSON 文件加载，缺失字段回退默认值。
//!
//! ## 设计说明
//!
//! 每个字段都有 `#[serde(default = "...")]`，用户只需在配置文件中
//! 写想改的项。缓动以字符串形式存储，解析失败回退为 linear，
//! 配置写错不会让程序拒绝启动。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::renderer::animation::EaseType;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读写失败
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析失败
    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 发牌动画参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DealSettings {
    #[serde(default = "default_deal_duration")]
    pub duration: f32,
    #[serde(default = "default_ease_out")]
    pub ease: String,
    #[serde(default = "default_deal_scale_from")]
    pub scale_from: f32,
    #[serde(default = "default_deal_rotation_from")]
    pub rotation_from: f32,
    /// 多张牌依次发出时，相邻两张的启动间隔（秒）
    #[serde(default = "default_deal_stagger")]
    pub delay_between_cards: f32,
}

fn default_deal_duration() -> f32 {
    0.6
}
fn default_deal_scale_from() -> f32 {
    0.7
}
fn default_deal_rotation_from() -> f32 {
    -5.0
}
fn default_deal_stagger() -> f32 {
    0.2
}

impl Default for DealSettings {
    fn default() -> Self {
        Self {
            duration: default_deal_duration(),
            ease: default_ease_out(),
            scale_from: default_deal_scale_from(),
            rotation_from: default_deal_rotation_from(),
            delay_between_cards: default_deal_stagger(),
        }
    }
}

/// 要牌动画参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HitSettings {
    #[serde(default = "default_hit_duration")]
    pub duration: f32,
    #[serde(default = "default_ease_out")]
    pub ease: String,
    #[serde(default = "default_hit_scale_from")]
    pub scale_from: f32,
}

fn default_hit_duration() -> f32 {
    0.4
}
fn default_hit_scale_from() -> f32 {
    0.8
}

impl Default for HitSettings {
    fn default() -> Self {
        Self {
            duration: default_hit_duration(),
            ease: default_ease_out(),
            scale_from: default_hit_scale_from(),
        }
    }
}

/// 翻牌动画参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlipSettings {
    #[serde(default = "default_flip_duration")]
    pub duration: f32,
    #[serde(default = "default_ease_in_out")]
    pub ease: String,
}

fn default_flip_duration() -> f32 {
    0.5
}

impl Default for FlipSettings {
    fn default() -> Self {
        Self {
            duration: default_flip_duration(),
            ease: default_ease_in_out(),
        }
    }
}

/// 收牌动画参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectSettings {
    #[serde(default = "default_collect_duration")]
    pub duration: f32,
    #[serde(default = "default_ease_in")]
    pub ease: String,
    #[serde(default = "default_collect_scale_to")]
    pub scale_to: f32,
}

fn default_collect_duration() -> f32 {
    0.8
}
fn default_collect_scale_to() -> f32 {
    0.3
}

impl Default for CollectSettings {
    fn default() -> Self {
        Self {
            duration: default_collect_duration(),
            ease: default_ease_in(),
            scale_to: default_collect_scale_to(),
        }
    }
}

/// 弹跳高亮参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BounceSettings {
    #[serde(default = "default_bounce_duration")]
    pub duration: f32,
    #[serde(default = "default_bounce_out")]
    pub ease: String,
    #[serde(default = "default_bounce_height")]
    pub height: f32,
}

fn default_bounce_duration() -> f32 {
    0.4
}
fn default_bounce_height() -> f32 {
    15.0
}

impl Default for BounceSettings {
    fn default() -> Self {
        Self {
            duration: default_bounce_duration(),
            ease: default_bounce_out(),
            height: default_bounce_height(),
        }
    }
}

fn default_ease_out() -> String {
    "ease_out".to_string()
}
fn default_ease_in() -> String {
    "ease_in".to_string()
}
fn default_ease_in_out() -> String {
    "ease_in_out".to_string()
}
fn default_bounce_out() -> String {
    "bounce_out".to_string()
}

/// 动画速度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPreset {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
    /// 所有动画时长为零，逻辑上立即完成
    Instant,
}

impl SpeedPreset {
    /// 时长缩放系数，时长除以该值
    pub fn multiplier(&self) -> f32 {
        match self {
            SpeedPreset::VerySlow => 0.5,
            SpeedPreset::Slow => 0.75,
            SpeedPreset::Normal => 1.0,
            SpeedPreset::Fast => 1.5,
            SpeedPreset::VeryFast => 2.0,
            SpeedPreset::Instant => f32::INFINITY,
        }
    }
}

/// 全部动画配置
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnimationSettings {
    #[serde(default)]
    pub deal: DealSettings,
    #[serde(default)]
    pub hit: HitSettings,
    #[serde(default)]
    pub flip: FlipSettings,
    #[serde(default)]
    pub collect: CollectSettings,
    #[serde(default)]
    pub bounce: BounceSettings,
}

impl AnimationSettings {
    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// 加载配置，失败时回退默认值
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "已加载动画配置");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "加载动画配置失败，使用默认值");
                Self::default()
            }
        }
    }

    /// 保存到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 按速度档位缩放所有时长
    ///
    /// `Instant` 档位把所有时长归零。
    pub fn apply_speed(&mut self, speed: SpeedPreset) {
        let m = speed.multiplier();
        let scale = |d: &mut f32| {
            *d = if m.is_infinite() { 0.0 } else { *d / m };
        };
        scale(&mut self.deal.duration);
        scale(&mut self.hit.duration);
        scale(&mut self.flip.duration);
        scale(&mut self.collect.duration);
        scale(&mut self.bounce.duration);
        scale(&mut self.deal.delay_between_cards);
    }

    /// 解析各档位的缓动名称
    pub fn deal_ease(&self) -> EaseType {
        EaseType::from_name(&self.deal.ease)
    }

    pub fn hit_ease(&self) -> EaseType {
        EaseType::from_name(&self.hit.ease)
    }

    pub fn flip_ease(&self) -> EaseType {
        EaseType::from_name(&self.flip.ease)
    }

    pub fn collect_ease(&self) -> EaseType {
        EaseType::from_name(&self.collect.ease)
    }

    pub fn bounce_ease(&self) -> EaseType {
        EaseType::from_name(&self.bounce.ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnimationSettings::default();
        assert_eq!(settings.deal.duration, 0.6);
        assert_eq!(settings.deal.scale_from, 0.7);
        assert_eq!(settings.deal.rotation_from, -5.0);
        assert_eq!(settings.hit.duration, 0.4);
        assert_eq!(settings.flip.duration, 0.5);
        assert_eq!(settings.collect.duration, 0.8);
        assert_eq!(settings.bounce.duration, 0.4);
        assert_eq!(settings.deal_ease(), EaseType::EaseOut);
        assert_eq!(settings.collect_ease(), EaseType::EaseIn);
        assert_eq!(settings.flip_ease(), EaseType::EaseInOut);
        assert_eq!(settings.bounce_ease(), EaseType::BounceOut);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "deal": { "duration": 1.2 } }"#;
        let settings: AnimationSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.deal.duration, 1.2);
        // 未写的字段回退默认值
        assert_eq!(settings.deal.ease, "ease_out");
        assert_eq!(settings.hit.duration, 0.4);
    }

    #[test]
    fn test_unknown_ease_falls_back_to_linear() {
        let json = r#"{ "flip": { "ease": "wobble" } }"#;
        let settings: AnimationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.flip_ease(), EaseType::Linear);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animation.json");

        let mut settings = AnimationSettings::default();
        settings.deal.duration = 0.9;
        settings.bounce.height = 50.0;
        settings.save(&path).unwrap();

        let loaded = AnimationSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let settings = AnimationSettings::load_or_default("/nonexistent/animation.json");
        assert_eq!(settings, AnimationSettings::default());
    }

    #[test]
    fn test_apply_speed() {
        let mut settings = AnimationSettings::default();
        settings.apply_speed(SpeedPreset::Fast);
        assert!((settings.deal.duration - 0.4).abs() < 1e-6);
        assert!((settings.hit.duration - 0.4 / 1.5).abs() < 1e-6);

        let mut instant = AnimationSettings::default();
        instant.apply_speed(SpeedPreset::Instant);
        assert_eq!(instant.deal.duration, 0.0);
        assert_eq!(instant.collect.duration, 0.0);
        assert_eq!(instant.deal.delay_between_cards, 0.0);
    }
}
