use super::*;

const DT: f64 = 1.0 / 60.0;

fn viewport() -> Viewport {
    Viewport::new(800.0, 1000.0).unwrap()
}

fn three_cards() -> Vec<CardGeometry> {
    vec![
        CardGeometry {
            top: 1000.0,
            height: 400.0,
        },
        CardGeometry {
            top: 1600.0,
            height: 400.0,
        },
        CardGeometry {
            top: 2200.0,
            height: 400.0,
        },
    ]
}

fn mounted() -> ScrollStackEngine {
    // stack anchor 20% of 1000 = 200 px, scale end 10% = 100 px.
    // pin_start(i) = top_i - 200 - 30*i -> 800, 1370, 1940.
    // pin_end = 3000 - 500 = 2500.
    ScrollStackEngine::mount(ScrollStackConfig::default(), three_cards(), Some(3000.0)).unwrap()
}

fn at_scroll(engine: &mut ScrollStackEngine, s: f64) -> Vec<CardTransform> {
    engine.jump_to_scroll(s);
    engine.on_frame(DT, viewport()).to_vec()
}

#[test]
fn missing_sentinel_is_a_mount_error() {
    let err = ScrollStackEngine::mount(ScrollStackConfig::default(), three_cards(), None)
        .err()
        .unwrap();
    assert!(err.to_string().contains("end marker"));
}

#[test]
fn zero_cards_is_a_valid_inert_engine() {
    let mut engine =
        ScrollStackEngine::mount(ScrollStackConfig::default(), Vec::new(), None).unwrap();
    assert!(engine.is_inert());
    assert!(engine.on_frame(DT, viewport()).is_empty());
}

#[test]
fn before_pin_start_cards_are_untouched() {
    let mut engine = mounted();
    for t in at_scroll(&mut engine, 500.0) {
        assert_eq!(t, CardTransform::IDENTITY);
    }
}

#[test]
fn pinned_card_tracks_scroll_delta() {
    let mut engine = mounted();
    let t = at_scroll(&mut engine, 850.0);
    // Card 0 pinned 50 px past its pin start, halfway through its scale window.
    assert_eq!(t[0].translate_y, 50.0);
    assert!((t[0].scale - 0.925).abs() < 1e-9);
    // Card 1 not yet reached.
    assert_eq!(t[1], CardTransform::IDENTITY);
}

#[test]
fn past_pin_end_translation_freezes() {
    let mut engine = mounted();
    let a = at_scroll(&mut engine, 2600.0);
    let b = at_scroll(&mut engine, 5000.0);
    // translate = pin_end - pin_start, constant however far we scroll.
    assert_eq!(a[0].translate_y, 2500.0 - 800.0);
    assert_eq!(b[0].translate_y, 2500.0 - 800.0);
    assert_eq!(a[2].translate_y, 2500.0 - 1940.0);
    assert_eq!(b[2].translate_y, 2500.0 - 1940.0);
}

#[test]
fn scale_is_monotonic_and_bounded_through_the_window() {
    let mut engine = mounted();
    let mut prev = f64::INFINITY;
    for step in 0..=20 {
        let s = 800.0 + (step as f64 / 20.0) * 100.0;
        let t = at_scroll(&mut engine, s);
        assert!(t[0].scale <= prev);
        assert!(t[0].scale <= 1.0);
        assert!(t[0].scale >= 0.85 - 1e-9);
        prev = t[0].scale;
    }
    assert!((prev - 0.85).abs() < 1e-9);
}

#[test]
fn final_scales_follow_base_plus_index_increment() {
    // itemScale 0.04, baseScale 0.82 -> 0.82 / 0.86 / 0.90 at full pin.
    let config = ScrollStackConfig {
        item_scale: 0.04,
        base_scale: 0.82,
        ..ScrollStackConfig::default()
    };
    let mut engine = ScrollStackEngine::mount(config, three_cards(), Some(3000.0)).unwrap();
    let t = at_scroll(&mut engine, 4000.0);
    assert!((t[0].scale - 0.82).abs() < 1e-9);
    assert!((t[1].scale - 0.86).abs() < 1e-9);
    assert!((t[2].scale - 0.90).abs() < 1e-9);
}

#[test]
fn smoothed_scroll_lags_raw_input() {
    let mut engine = mounted();
    engine.on_scroll(1000.0);
    engine.on_frame(DT, viewport());
    let eased = engine.smoothed_scroll();
    assert!(eased > 0.0);
    assert!(eased < 1000.0);
    // Repeated frames converge on the raw offset.
    for _ in 0..600 {
        engine.on_frame(DT, viewport());
    }
    assert_eq!(engine.smoothed_scroll(), 1000.0);
}

#[test]
fn redundant_requests_coalesce_to_one_recompute_per_frame() {
    let mut engine = mounted();
    engine.jump_to_scroll(850.0);
    engine.request_update();
    engine.request_update();
    engine.on_scroll(850.0);
    let t = engine.on_frame(DT, viewport()).to_vec();
    assert_eq!(t[0].translate_y, 50.0);
    // Settled and clean: the next frame leaves transforms untouched.
    let again = engine.on_frame(DT, viewport()).to_vec();
    assert_eq!(t, again);
}

#[test]
fn programmed_scroll_eases_to_the_anchor() {
    let mut engine = mounted();
    engine.scroll_to(850.0, 1.2, Ease::OutExpo);
    engine.on_frame(0.3, viewport());
    let mid = engine.smoothed_scroll();
    assert!(mid > 0.0 && mid < 850.0);
    engine.on_frame(1.2, viewport());
    assert_eq!(engine.smoothed_scroll(), 850.0);
    assert_eq!(engine.card_transforms()[0].translate_y, 50.0);
}

#[test]
fn margins_apply_below_all_but_the_last_card() {
    let engine = mounted();
    assert_eq!(engine.margin_below(0), 100.0);
    assert_eq!(engine.margin_below(1), 100.0);
    assert_eq!(engine.margin_below(2), 0.0);
}

#[test]
fn unmount_makes_the_engine_inert() {
    let mut engine = mounted();
    engine.unmount();
    engine.on_scroll(1000.0);
    engine.request_update();
    assert!(engine.on_frame(DT, viewport()).is_empty());
    assert!(engine.is_inert());
}

#[test]
fn config_parses_from_host_json() {
    let config = ScrollStackConfig::from_json(
        r#"{"stack_position": "25%", "scale_end_position": 120, "base_scale": 0.9}"#,
    )
    .unwrap();
    assert_eq!(config.stack_position, Anchor::Fraction(0.25));
    assert_eq!(config.scale_end_position, Anchor::Px(120.0));
    assert_eq!(config.base_scale, 0.9);
    // Omitted fields keep the documented defaults.
    assert_eq!(config.item_distance, 100.0);
    assert!(config.use_window_scroll);
}

#[test]
fn invalid_config_is_rejected_at_mount() {
    let config = ScrollStackConfig {
        base_scale: 0.0,
        ..ScrollStackConfig::default()
    };
    assert!(ScrollStackEngine::mount(config, three_cards(), Some(3000.0)).is_err());
}
