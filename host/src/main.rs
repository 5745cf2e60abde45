//! 无头演示：固定步长播放完整的一局 21 点。
//!
//! 玩家行动跟随基础策略建议，庄家按"不足 17 点要牌"执行。
//! 所有动画以固定帧率推进并把关键事件写入日志。

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use blackjack_runtime::{Advice, RoundPhase};
use host::app::GameApp;
use host::config::{AnimationSettings, SpeedPreset};

#[derive(Parser, Debug)]
#[command(name = "blackjack-demo", about = "无头播放一局 21 点动画")]
struct Args {
    /// 洗牌种子，省略时取当前时间戳
    #[arg(long)]
    seed: Option<u64>,

    /// 动画速度档位
    #[arg(long, value_enum, default_value = "normal")]
    speed: SpeedArg,

    /// 动画配置文件路径
    #[arg(long, default_value = "animation.json")]
    config: String,

    /// 模拟帧率
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SpeedArg {
    VerySlow,
    Slow,
    Normal,
    Fast,
    VeryFast,
    Instant,
}

impl From<SpeedArg> for SpeedPreset {
    fn from(arg: SpeedArg) -> Self {
        match arg {
            SpeedArg::VerySlow => SpeedPreset::VerySlow,
            SpeedArg::Slow => SpeedPreset::Slow,
            SpeedArg::Normal => SpeedPreset::Normal,
            SpeedArg::Fast => SpeedPreset::Fast,
            SpeedArg::VeryFast => SpeedPreset::VeryFast,
            SpeedArg::Instant => SpeedPreset::Instant,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let args = Args::parse();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("系统时钟早于 UNIX 纪元")?
            .as_secs(),
    };
    info!(seed, "牌堆种子");

    let mut settings = AnimationSettings::load_or_default(&args.config);
    settings.apply_speed(args.speed.into());

    if args.fps == 0 {
        bail!("帧率必须大于 0");
    }
    let dt = 1.0 / args.fps as f32;

    let mut app = GameApp::new(seed, settings);
    app.start_round().context("发牌失败")?;

    // 固定步长推进，最多模拟 120 秒
    let max_ticks = args.fps * 120;
    for _ in 0..max_ticks {
        let events = app.update_with(dt);
        for event in &events {
            info!(?event, "牌桌事件");
        }

        if !app.is_idle() {
            continue;
        }

        match app.phase() {
            RoundPhase::PlayerTurn => match app.advice() {
                Some(Advice::Hit) => {
                    app.player_hit().context("玩家要牌失败")?;
                }
                Some(Advice::Stand) | None => {
                    app.player_stand().context("玩家停牌失败")?;
                }
            },
            RoundPhase::DealerTurn => {
                // 庄家策略属于调用方：不足 17 点要牌
                if app.round().dealer_hand().value() < 17 {
                    app.dealer_hit().context("庄家要牌失败")?;
                } else {
                    app.dealer_stand().context("庄家停牌失败")?;
                }
            }
            RoundPhase::Finished => break,
            _ => {}
        }
    }

    match app.outcome() {
        Some(outcome) => {
            info!(
                ?outcome,
                player = app.round().player_hand().value(),
                dealer = app.round().dealer_hand().value(),
                "本局结束"
            );
            Ok(())
        }
        None => bail!("模拟超时，本局未结算"),
    }
}
