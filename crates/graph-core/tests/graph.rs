// File: crates/graph-core/tests/graph.rs
// Purpose: End-to-end widget behavior: data/size changes, redraw loop, and reset semantics.

use std::rc::Rc;

use graph_core::{AnimatedLineGraph, GraphConfig, GraphError, ManualClock, Phase, Point};

fn config() -> GraphConfig {
    GraphConfig::default().with_duration_ms(900.0).with_padding_percent(0.0)
}

#[test]
fn no_path_until_enough_data() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(300.0, 100.0);
    assert!(!g.has_path());

    let f = g.frame();
    assert!(f.polyline.is_empty());
    assert_eq!(f.marker, None);
    assert!(!f.needs_redraw);

    g.set_samples(vec![1.0]);
    assert!(!g.has_path());
    assert!(!g.frame().needs_redraw);
}

#[test]
fn data_before_size_and_size_before_data_agree() {
    let clock = ManualClock::new(0);
    let mut a = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    a.set_samples(vec![0.0, 1.0, 2.0, 3.0]);
    a.set_viewport_size(300.0, 100.0);

    let mut b = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    b.set_viewport_size(300.0, 100.0);
    b.set_samples(vec![0.0, 1.0, 2.0, 3.0]);

    assert_eq!(a.path(), b.path());
    assert_eq!(a.path().len(), 4);
    assert_eq!(a.path()[3], Point::new(300.0, 100.0));
}

#[test]
fn redraw_loop_reveals_path_then_stops() {
    let clock = ManualClock::new(10_000);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(300.0, 100.0);
    g.set_samples(vec![0.0, 1.0, 2.0]);
    assert_eq!(g.phase(), Phase::Idle);
    let path = g.path().to_vec();

    let f = g.frame();
    assert!(f.needs_redraw);
    assert_eq!(f.polyline, &path[..1]);
    assert_eq!(f.marker, Some(path[0]));

    let mut frames = 1;
    let mut last_len = 1;
    loop {
        clock.advance(16);
        let f = g.frame();
        assert!(f.polyline.len() >= last_len);
        last_len = f.polyline.len();
        if !f.needs_redraw {
            assert_eq!(f.marker, None);
            break;
        }
        assert!(f.marker.is_some());
        frames += 1;
        assert!(frames < 1_000, "animation must terminate");
    }
    assert_eq!(g.phase(), Phase::Done);
    assert_eq!(g.revealed(), 3);

    // Stays done.
    clock.advance(10_000);
    assert!(!g.frame().needs_redraw);
}

#[test]
fn new_samples_restart_animation() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(100.0, 100.0);
    g.set_samples(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    g.frame();
    clock.advance(500);
    g.frame();
    assert_eq!(g.revealed(), 2);

    g.set_samples(vec![4.0, 2.0, 9.0]);
    assert_eq!(g.revealed(), 0);
    assert_eq!(g.animation().start(), 500);
    assert_eq!(g.path().len(), 3);

    let marker = g.frame().marker;
    assert_eq!(marker, Some(g.path()[0]));
    assert_eq!(g.revealed(), 1);
}

#[test]
fn resize_recomputes_and_restarts() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_samples(vec![0.0, 10.0]);
    // No size yet: everything sits at the origin.
    assert_eq!(g.path(), &[Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);

    clock.set(2_000);
    g.frame();
    g.set_viewport_size(50.0, 20.0);
    assert_eq!(g.animation().start(), 2_000);
    assert_eq!(g.revealed(), 0);
    assert_eq!(g.path(), &[Point::new(0.0, 0.0), Point::new(50.0, 20.0)]);
}

#[test]
fn current_frontier_does_not_advance() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(30.0, 30.0);
    g.set_samples(vec![1.0, 2.0, 3.0]);
    assert_eq!(g.current_frontier(450), Some(g.path()[1]));
    assert_eq!(g.current_frontier(450), Some(g.path()[1]));
    assert_eq!(g.revealed(), 0);
}

#[test]
fn frame_at_uses_explicit_time() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(30.0, 30.0);
    g.set_samples(vec![1.0, 2.0, 3.0]);
    assert!(g.frame_at(0).needs_redraw);
    let f = g.frame_at(900);
    assert!(!f.needs_redraw);
    assert_eq!(f.polyline.len(), 1);
}

#[test]
fn configure_rejects_bad_values_and_keeps_previous() {
    let mut g = AnimatedLineGraph::with_clock(config(), ManualClock::new(0)).unwrap();
    let err = g.configure(config().with_duration_ms(0.0)).unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfiguration(_)));
    let err = g.configure(config().with_padding_percent(-0.1)).unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfiguration(_)));
    assert_eq!(g.config().duration_ms, 900.0);

    g.configure(config().with_duration_ms(300.0)).expect("valid config");
    assert_eq!(g.config().duration_ms, 300.0);
}

#[test]
fn duration_change_applies_to_running_animation() {
    let clock = Rc::new(ManualClock::new(0));
    let mut g = AnimatedLineGraph::with_clock(config(), Rc::clone(&clock)).unwrap();
    g.set_viewport_size(30.0, 30.0);
    g.set_samples(vec![1.0, 2.0, 3.0]);
    g.frame();

    g.configure(config().with_duration_ms(100.0)).unwrap();
    clock.advance(150);
    assert!(!g.frame().needs_redraw);
}

#[test]
fn padding_change_applies_on_next_recompute() {
    let clock = ManualClock::new(0);
    let mut g = AnimatedLineGraph::with_clock(config(), &clock).unwrap();
    g.set_viewport_size(10.0, 100.0);
    g.set_samples(vec![10.0, 20.0]);
    let before = g.path().to_vec();

    g.configure(config().with_padding_percent(0.5)).unwrap();
    assert_eq!(g.path(), &before[..]);

    g.set_samples(vec![10.0, 20.0]);
    assert_ne!(g.path(), &before[..]);
}

#[test]
fn constructor_rejects_invalid_config() {
    let clock = ManualClock::new(0);
    let bad = config().with_duration_ms(0.0);
    assert!(matches!(
        AnimatedLineGraph::with_clock(bad, &clock),
        Err(GraphError::InvalidConfiguration(_))
    ));
    let bad = config().with_padding_percent(-0.1);
    assert!(matches!(AnimatedLineGraph::new(bad), Err(GraphError::InvalidConfiguration(_))));

    assert!(AnimatedLineGraph::new(config()).is_ok());
    let g: AnimatedLineGraph = AnimatedLineGraph::default();
    assert_eq!(g.config(), &GraphConfig::default());
}
