use rangekit::markers;
use rangekit::{map_range, DemoConfig, MarkerBoard, MarkerSurface, MarkerTimers, RetriggerPolicy, ScaleForm, ScaleOutcome};
use anyhow::Result;
use std::fs;
use std::env;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_form_to_animation_pace() -> Result<()> {
    let config = DemoConfig::default();
    let mut board = MarkerBoard::with_elements(config.elements.all());
    let mut timers = MarkerTimers::new(config.retrigger);

    // Submit the demo scenario
    let form = ScaleForm {
        value: "5".to_string(),
        in_min: "0".to_string(),
        in_max: "10".to_string(),
        out_min: "0".to_string(),
        out_max: "100".to_string(),
    };
    let outcome = form.submit();
    assert_eq!(outcome.text(), "Scaled value: 50.000");

    let duration_ms = match outcome {
        ScaleOutcome::Scaled { duration_ms: Some(d), .. } => d,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(duration_ms, 1150);

    // Use the derived pace for an animation run
    let handle = markers::trigger_animation(&mut board, &mut timers, &config, ms(duration_ms), ms(0));
    assert!(handle.is_some());
    assert!(board.has_class("box", "animate"));

    timers.fire_due(ms(1149), &mut board);
    assert!(board.has_class("box", "animate"));
    timers.fire_due(ms(1150), &mut board);
    assert!(!board.has_class("box", "animate"));

    Ok(())
}

#[test]
fn test_stacked_retrigger_ends_early() {
    let config = DemoConfig::default();
    let mut board = MarkerBoard::with_elements(config.elements.all());
    let mut timers = MarkerTimers::new(RetriggerPolicy::Stack);
    let duration = config.animation_duration();

    markers::trigger_animation(&mut board, &mut timers, &config, duration, ms(0));
    markers::trigger_animation(&mut board, &mut timers, &config, duration, ms(300));

    // The first run's removal cuts the second run short
    timers.fire_due(ms(600), &mut board);
    assert!(!board.has_class("box", "animate"));
    assert_eq!(timers.pending_count(), 1);

    timers.fire_due(ms(900), &mut board);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn test_replaced_retrigger_runs_full_length() {
    let config = DemoConfig { retrigger: RetriggerPolicy::Replace, ..DemoConfig::default() };
    let mut board = MarkerBoard::with_elements(config.elements.all());
    let mut timers = MarkerTimers::new(config.retrigger);
    let duration = config.animation_duration();

    let first = markers::trigger_animation(&mut board, &mut timers, &config, duration, ms(0)).unwrap();
    let second = markers::trigger_animation(&mut board, &mut timers, &config, duration, ms(300)).unwrap();
    assert!(!timers.is_pending(first));

    timers.fire_due(ms(600), &mut board);
    assert!(board.has_class("box", "animate"));

    assert!(timers.cancel(second));
    timers.fire_due(ms(900), &mut board);
    assert!(board.has_class("box", "animate"));
}

#[test]
fn test_config_file_drives_markers() -> Result<()> {
    let path = env::temp_dir().join("rangekit_integration_config.json");
    fs::write(
        &path,
        r#"{
            "animation_duration_ms": 250,
            "elements": { "modal": "dialog" },
            "classes": { "open": "shown" }
        }"#,
    )?;

    let config = DemoConfig::load(&path)?;
    let _ = fs::remove_file(&path);

    let mut board = MarkerBoard::with_elements(config.elements.all());
    assert!(markers::open_modal(&mut board, &config));
    assert!(board.has_class("dialog", "shown"));
    assert!(!board.has_element("modal"));
    assert_eq!(config.animation_duration(), ms(250));

    Ok(())
}

#[test]
fn test_absent_elements_never_fail() {
    let config = DemoConfig::default();
    let mut board = MarkerBoard::with_elements([config.elements.card.as_str()]);
    let mut timers = MarkerTimers::default();

    assert_eq!(markers::trigger_animation(&mut board, &mut timers, &config, ms(100), ms(0)), None);
    assert!(!markers::start_loader(&mut board, &config));
    assert!(!markers::stop_loader(&mut board, &config));
    assert!(!markers::open_modal(&mut board, &config));
    assert_eq!(markers::flip_card(&mut board, &config), Some(true));
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn test_mapping_properties_from_the_outside() {
    assert!(map_range(1.0, 4.0, 4.0, 0.0, 1.0).is_err());
    assert_eq!(map_range(-5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 0.0);
    assert_eq!(map_range(15.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 100.0);
    assert_eq!(map_range(5.0, 10.0, 0.0, 0.0, 100.0).unwrap(), 50.0);
    assert_eq!(map_range(0.0, 10.0, 0.0, 0.0, 100.0).unwrap(), 100.0);
    assert_eq!(map_range(10.0, 10.0, 0.0, 0.0, 100.0).unwrap(), 0.0);
    assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 0.0).unwrap(), 50.0);
    assert_eq!(map_range(0.0, 0.0, 10.0, 100.0, 0.0).unwrap(), 100.0);
}
