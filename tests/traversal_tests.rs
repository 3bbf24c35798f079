// Host-side tests for the traversal state machine.

use powers_core::*;

fn english_controller() -> TraversalController {
    TraversalController::new(ZoomConfig::default().with_initial_mode(DisplayMode::English))
        .expect("default config is valid")
}

fn step(c: &mut TraversalController, direction: Direction, times: usize) {
    for _ in 0..times {
        c.advance_layer(direction);
    }
}

#[test]
fn starts_on_home_layer_in_morse() {
    let c = TraversalController::new(ZoomConfig::default()).unwrap();
    assert_eq!(c.layer_index(), 12);
    assert_eq!(ENGLISH[c.layer_index()], "Human");
    assert_eq!(c.mode(), DisplayMode::Morse);
    assert_eq!(c.traversals(), 0);
    assert_eq!(c.theme_cycle_count(), 0);
    assert_eq!(c.visited_count(), 0);
    assert!(c.gesture_log().is_empty());
}

#[test]
fn wraparound_is_exact_in_both_directions() {
    let n = LAYER_COUNT as isize;
    let start = 12isize;
    for d in -n..=n {
        let mut c = english_controller();
        let direction = if d < 0 { Direction::Down } else { Direction::Up };
        step(&mut c, direction, d.unsigned_abs());
        let expected = ((start + d) % n + n) % n;
        assert_eq!(c.layer_index() as isize, expected, "delta {d}");
    }
}

#[test]
fn wrap_index_handles_edges() {
    assert_eq!(wrap_index(0, -1, LAYER_COUNT), LAYER_COUNT - 1);
    assert_eq!(wrap_index(LAYER_COUNT - 1, 1, LAYER_COUNT), 0);
    assert_eq!(wrap_index(5, 0, LAYER_COUNT), 5);
}

#[test]
fn scroll_and_click_scenario() {
    let mut c = english_controller();
    assert_eq!(c.current_text(), "Human");

    c.handle(Gesture::Traverse(Direction::Up));
    assert_eq!(c.layer_index(), 13);
    assert_eq!(c.current_text(), "Group");
    assert_eq!(c.traversals(), 1);

    c.handle(Gesture::Traverse(Direction::Down));
    c.handle(Gesture::Traverse(Direction::Down));
    assert_eq!(c.layer_index(), 11);
    assert_eq!(c.current_text(), "Organ System");
    assert_eq!(c.traversals(), 3);

    c.handle(Gesture::CycleMode);
    assert_eq!(c.mode(), DisplayMode::German);
    assert_eq!(c.current_text(), "Organsystem");
    assert_eq!(c.object_label(), "[Deutsch] Organsystem");
    assert_eq!(c.traversals(), 3, "mode switches are not traversals");
}

#[test]
fn morse_label_for_quark() {
    let mut c = TraversalController::new(ZoomConfig::default()).unwrap();
    step(&mut c, Direction::Down, 12);
    assert_eq!(c.layer_index(), 0);
    assert_eq!(c.current_text(), "--.- ..- .- .-. -.-");
}

#[test]
fn mode_cycles_through_all_five() {
    let mut c = english_controller();
    let start = c.mode().index();
    for k in 1..=12 {
        c.advance_mode();
        assert_eq!(c.mode().index(), (start + k) % DisplayMode::COUNT);
    }

    let mut c = english_controller();
    for _ in 0..5 {
        c.advance_mode();
    }
    assert_eq!(c.mode(), DisplayMode::English);
}

#[test]
fn visiting_every_layer_rotates_theme_once() {
    let mut c = english_controller();
    step(&mut c, Direction::Up, LAYER_COUNT - 1);
    assert_eq!(c.theme_cycle_count(), 0);
    assert_eq!(c.visited_count(), LAYER_COUNT - 1);

    let fx = c.advance_layer(Direction::Up);
    assert_eq!(c.theme_cycle_count(), 1);
    assert_eq!(c.visited_count(), 0);
    assert_eq!(c.theme(), PALETTE[1]);
    assert!(fx.contains(&Effect::ApplyTheme(PALETTE[1].styles())));
}

#[test]
fn revisits_do_not_complete_a_cycle() {
    let mut c = english_controller();
    // Bounce around without ever reaching layer 23.
    step(&mut c, Direction::Up, 10);
    step(&mut c, Direction::Down, 10);
    step(&mut c, Direction::Down, 20);
    assert_eq!(c.layer_index(), 24);
    assert_eq!(c.visited_count(), LAYER_COUNT - 1);
    for _ in 0..50 {
        step(&mut c, Direction::Up, 5);
        step(&mut c, Direction::Down, 5);
    }
    assert_eq!(c.theme_cycle_count(), 0);

    step(&mut c, Direction::Down, 1);
    assert_eq!(c.layer_index(), 23);
    assert_eq!(c.theme_cycle_count(), 1);
    assert_eq!(c.visited_count(), 0);
}

#[test]
fn few_distinct_layers_never_cycle() {
    let mut c = english_controller();
    for _ in 0..500 {
        c.advance_layer(Direction::Up);
        c.advance_layer(Direction::Down);
    }
    assert_eq!(c.theme_cycle_count(), 0);
    assert_eq!(c.visited_count(), 2);
    assert_eq!(c.traversals(), 1000);
}

#[test]
fn palette_wraps_by_cycle_index() {
    let mut c = english_controller();
    let fx = c.apply_theme_cycle(7);
    assert_eq!(c.theme(), PALETTE[2]);
    assert_eq!(fx.as_slice(), &[Effect::ApplyTheme(PALETTE[2].styles())]);
}

#[test]
fn advance_layer_effects() {
    let mut c = english_controller();
    let fx = c.advance_layer(Direction::Up);
    let expected = [
        Effect::SetTraversals(1),
        Effect::SetGestureLog("@~".to_string()),
        Effect::SetZoom(0.8_f64.powi(3)),
        Effect::SpawnLayer {
            text: "Group".to_string(),
            color: PALETTE[0].foreground,
        },
        Effect::RetireStaleLayers { delay_ms: 400 },
        Effect::SetObjectLabel("[English] Group".to_string()),
    ];
    assert_eq!(fx.as_slice(), &expected);
}

#[test]
fn zoom_scale_follows_half_count_exponent() {
    assert!((zoom_scale(0.8, 16, 32) - 1.0).abs() < 1e-12);
    assert!((zoom_scale(0.8, 0, 32) - 0.8_f64.powi(16)).abs() < 1e-12);
    assert!((zoom_scale(0.8, 31, 32) - 0.8_f64.powi(-15)).abs() < 1e-9);
    let c = english_controller();
    assert!((c.scale() - 0.8_f64.powi(4)).abs() < 1e-12);
}

#[test]
fn gesture_log_records_tokens_in_order() {
    let mut c = english_controller();
    c.advance_layer(Direction::Up);
    c.advance_layer(Direction::Down);
    c.advance_mode();
    c.toggle_log();
    c.toggle_help(HelpTopic::About);
    assert_eq!(c.gesture_log().as_str(), "@~_-&.&");
    assert_eq!(c.gesture_log().len(), 3);
}

#[test]
fn mode_switch_refreshes_labels() {
    let mut c = english_controller();
    let fx = c.advance_mode();
    assert!(fx.contains(&Effect::SetLayerText("Mensch".to_string())));
    assert!(fx.contains(&Effect::SetButtonLabels {
        about: "Über".to_string(),
        navigate: "Navigieren".to_string(),
    }));
    assert!(!fx.iter().any(|e| matches!(e, Effect::ShowOverlay(_))));
}

#[test]
fn help_overlay_toggles_and_survives_mode_switch() {
    let mut c = english_controller();
    let fx = c.toggle_help(HelpTopic::About);
    assert_eq!(fx.as_slice(), &[Effect::ShowOverlay(HelpTopic::About.text())]);
    assert_eq!(c.overlay(), Some(HelpTopic::About));

    let fx = c.advance_mode();
    assert!(fx.contains(&Effect::ShowOverlay(HelpTopic::About.text())));

    c.toggle_help(HelpTopic::Navigate);
    assert_eq!(c.overlay(), Some(HelpTopic::Navigate));

    let fx = c.toggle_help(HelpTopic::Navigate);
    assert_eq!(fx.as_slice(), &[Effect::HideOverlay]);
    assert_eq!(c.overlay(), None);
}

#[test]
fn toggle_log_leaves_navigation_alone() {
    let mut c = english_controller();
    assert!(!c.log_visible());
    let fx = c.handle(Gesture::ToggleLog);
    assert_eq!(fx.as_slice(), &[Effect::SetLogVisible(true)]);
    c.handle(Gesture::ToggleLog);
    assert!(!c.log_visible());
    assert_eq!(c.layer_index(), 12);
    assert_eq!(c.mode(), DisplayMode::English);
    assert_eq!(c.traversals(), 0);
    assert!(c.gesture_log().is_empty());
}

#[test]
fn boot_renders_start_state() {
    let mut c = TraversalController::new(ZoomConfig::default()).unwrap();
    let fx = c.boot();
    assert!(fx.contains(&Effect::SpawnLayer {
        text: morse::encode("Human"),
        color: PALETTE[0].foreground,
    }));
    assert!(fx.contains(&Effect::SetTraversals(0)));
    assert!(fx.contains(&Effect::SetLogVisible(false)));
    assert!(fx.contains(&Effect::ApplyTheme(PALETTE[0].styles())));
    assert!(fx.contains(&Effect::SetObjectLabel(
        "[Morse Code] .... ..- -- .- -.".to_string()
    )));
    assert!(!fx.iter().any(|e| matches!(e, Effect::SetZoom(_))));
}

#[test]
fn invalid_config_is_rejected() {
    let empty = ZoomConfig {
        palette: &[],
        ..ZoomConfig::default()
    };
    assert!(matches!(
        TraversalController::new(empty),
        Err(CoreError::InvalidConfig(_))
    ));

    let far_home = ZoomConfig {
        home_layer: LAYER_COUNT,
        ..ZoomConfig::default()
    };
    assert!(far_home.validate().is_err());

    let flat = ZoomConfig {
        scale_base: 0.0,
        ..ZoomConfig::default()
    };
    assert!(flat.validate().is_err());
    assert_eq!(ZoomConfig::default().palette_size(), 5);
}
