//! # Presets 模块
//!
//! 牌桌常用动画的预设构造：发牌、要牌、翻牌、收牌、弹跳高亮。
//!
//! 所有参数来自配置层，这里只负责把参数组装成动画实例。

use crate::config::{BounceSettings, CollectSettings, DealSettings, FlipSettings, HitSettings};

use super::animation::{Animation, AnimationConfig, EaseType, Effect, Vec2};
use super::card_sprite::CardSprite;

/// 发牌：从牌堆滑入手牌位，同时放大并摆正
pub fn deal_animation(
    sprite: CardSprite,
    from: Vec2,
    to: Vec2,
    delay: f32,
    settings: &DealSettings,
) -> Animation {
    let config = AnimationConfig::default()
        .with_duration(settings.duration)
        .with_delay(delay)
        .with_ease(EaseType::from_name(&settings.ease));

    Animation::combo(sprite, config)
        .add_slide(from, to)
        .add_scale(settings.scale_from, 1.0)
        .add_rotation(settings.rotation_from, 0.0)
}

/// 要牌：比发牌更短促的滑入
pub fn hit_animation(
    sprite: CardSprite,
    from: Vec2,
    to: Vec2,
    settings: &HitSettings,
) -> Animation {
    let config = AnimationConfig::default()
        .with_duration(settings.duration)
        .with_ease(EaseType::from_name(&settings.ease));

    Animation::combo(sprite, config)
        .add_slide(from, to)
        .add_scale(settings.scale_from, 1.0)
}

/// 翻牌揭示：背面翻向正面，完成时切换逻辑正反面
pub fn flip_reveal_animation(sprite: CardSprite, settings: &FlipSettings) -> Animation {
    let config = AnimationConfig::default()
        .with_duration(settings.duration)
        .with_ease(EaseType::from_name(&settings.ease));

    Animation::new(sprite, Effect::Flip { to_back: false }, config)
}

/// 收牌：滑向弃牌堆，同时缩小并淡出
pub fn collect_animation(
    sprite: CardSprite,
    discard: Vec2,
    delay: f32,
    settings: &CollectSettings,
) -> Animation {
    let from = sprite.position();
    let config = AnimationConfig::default()
        .with_duration(settings.duration)
        .with_delay(delay)
        .with_ease(EaseType::from_name(&settings.ease));

    Animation::combo(sprite, config)
        .add_slide(from, discard)
        .add_scale(1.0, settings.scale_to)
        .add_fade(1.0, 0.0)
}

/// 弹跳高亮：垂直正弦偏移，结束时回到原位
pub fn bounce_highlight_animation(sprite: CardSprite, settings: &BounceSettings) -> Animation {
    let config = AnimationConfig::default()
        .with_duration(settings.duration)
        .with_ease(EaseType::from_name(&settings.ease));

    Animation::new(
        sprite,
        Effect::Bounce {
            height: settings.height,
        },
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::animation::AnimationScheduler;
    use blackjack_runtime::{Card, Rank, Suit};

    fn sprite_at(pos: Vec2) -> CardSprite {
        CardSprite::new(Card::new(Suit::Hearts, Rank::Ten), pos)
    }

    fn run_to_completion(scheduler: &mut AnimationScheduler) {
        // 60fps 推进最多 5 秒，足够覆盖所有预设时长
        for _ in 0..300 {
            scheduler.update_with(1.0 / 60.0);
            if !scheduler.has_animations() {
                return;
            }
        }
        panic!("动画未在期限内完成");
    }

    #[test]
    fn test_deal_lands_at_target() {
        let s = sprite_at(Vec2::new(400.0, 50.0));
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(deal_animation(
            s.clone(),
            Vec2::new(400.0, 50.0),
            Vec2::new(120.0, 500.0),
            0.0,
            &DealSettings::default(),
        ));

        run_to_completion(&mut scheduler);

        let snap = s.snapshot();
        assert_eq!(snap.position, Vec2::new(120.0, 500.0));
        assert_eq!(snap.scale, 1.0);
        assert_eq!(snap.rotation, 0.0);
    }

    #[test]
    fn test_flip_reveal_flips_face() {
        let s = CardSprite::new_face_down(
            Card::new(Suit::Spades, Rank::King),
            Vec2::zero(),
        );
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(flip_reveal_animation(s.clone(), &FlipSettings::default()));

        run_to_completion(&mut scheduler);

        assert!(s.is_face_up());
        assert_eq!(s.flip_progress(), 0.0);
    }

    #[test]
    fn test_collect_fades_out() {
        let s = sprite_at(Vec2::new(120.0, 500.0));
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(collect_animation(
            s.clone(),
            Vec2::new(700.0, 50.0),
            0.0,
            &CollectSettings::default(),
        ));

        run_to_completion(&mut scheduler);

        let snap = s.snapshot();
        assert_eq!(snap.position, Vec2::new(700.0, 50.0));
        assert_eq!(snap.alpha, 0.0);
        assert!(!snap.visible);
        assert!((snap.scale - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_returns_to_rest() {
        let s = sprite_at(Vec2::new(100.0, 100.0));
        let mut scheduler = AnimationScheduler::new();
        scheduler.add(bounce_highlight_animation(
            s.clone(),
            &BounceSettings::default(),
        ));

        run_to_completion(&mut scheduler);

        assert!(s.y_offset().abs() < 1e-4);
        assert_eq!(s.position(), Vec2::new(100.0, 100.0));
    }
}
