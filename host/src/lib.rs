//! # Host
//!
//! 21 点牌桌的宿主层：动画引擎、精灵状态与牌局驱动。
//!
//! ## 模块结构
//!
//! - [`renderer`]：动画系统与卡牌精灵
//! - [`config`]：动画参数配置
//! - [`table`]：牌桌协调层（精灵 + 动画 → 牌桌事件）
//! - [`app`]：游戏驱动（runtime 状态机 + 牌桌）

pub mod app;
pub mod config;
pub mod renderer;
pub mod table;
