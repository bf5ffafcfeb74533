#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::testing::MemorySurface;

// =============================================================
// Helpers
// =============================================================

fn c(y: f64) -> Contact {
    Contact::new(1, 50.0, y)
}

fn pull() -> PullToRefresh {
    PullToRefresh::new(PullToRefreshConfig::default())
}

#[derive(Default)]
struct Recorder {
    refreshes: usize,
    statuses: Vec<PullStatus>,
}

fn recording(rec: &Rc<RefCell<Recorder>>) -> PullHandlers {
    let (refresh, status) = (Rc::clone(rec), Rc::clone(rec));
    PullHandlers::new()
        .on_refresh(move || refresh.borrow_mut().refreshes += 1)
        .on_status(move |s| status.borrow_mut().statuses.push(s))
}

// =============================================================
// Recognizer
// =============================================================

#[test]
fn pull_applies_resistance() {
    let mut p = pull();
    p.touch_start(&[c(100.0)], 0.0);
    assert!(p.touch_move(&[c(200.0)], 0.0));
    assert_eq!(p.status(), PullStatus { is_pulling: true, pull_distance: 40.0, is_refreshing: false });
}

#[test]
fn pull_distance_is_capped() {
    let mut p = pull();
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(1_000.0)], 0.0);
    assert_eq!(p.status().pull_distance, 120.0);
}

#[test]
fn start_below_top_never_pulls() {
    let mut p = pull();
    p.touch_start(&[c(100.0)], 35.0);
    assert!(!p.touch_move(&[c(400.0)], 0.0));
    assert!(!p.touch_end());
    assert_eq!(p.status(), PullStatus::default());
}

#[test]
fn upward_move_is_not_consumed() {
    let mut p = pull();
    p.touch_start(&[c(300.0)], 0.0);
    assert!(!p.touch_move(&[c(250.0)], 0.0));
    assert!(!p.status().is_pulling);
}

#[test]
fn move_after_content_scrolled_is_not_consumed() {
    let mut p = pull();
    p.touch_start(&[c(100.0)], 0.0);
    assert!(!p.touch_move(&[c(200.0)], 12.0));
}

#[test]
fn negative_scroll_offset_counts_as_top() {
    let mut p = pull();
    p.touch_start(&[c(100.0)], -4.0);
    assert!(p.touch_move(&[c(150.0)], -8.0));
}

#[test]
fn release_past_threshold_starts_refresh() {
    let mut p = pull();
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(250.0)], 0.0);
    assert!(p.touch_end());
    assert_eq!(p.status(), PullStatus { is_pulling: true, pull_distance: 80.0, is_refreshing: true });
}

#[test]
fn release_short_of_threshold_resets() {
    let mut p = pull();
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(150.0)], 0.0);
    assert!(!p.touch_end());
    assert_eq!(p.status(), PullStatus::default());
}

#[test]
fn input_ignored_while_refreshing() {
    let mut p = pull();
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(250.0)], 0.0);
    p.touch_end();

    p.touch_start(&[c(0.0)], 0.0);
    assert!(!p.touch_move(&[c(300.0)], 0.0));
    assert!(!p.touch_end());
    assert!(p.status().is_refreshing);

    p.complete_refresh();
    assert_eq!(p.status(), PullStatus::default());
}

#[test]
fn cancel_behaves_like_end() {
    let mut p = pull();
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(250.0)], 0.0);
    let out = p.handle(&TouchInput::new(TouchPhase::Cancel, vec![]));
    assert!(out.refresh);
}

#[test]
fn custom_threshold_and_resistance() {
    let config = PullToRefreshConfig { threshold: 40.0, resistance: 1.0 };
    let mut p = PullToRefresh::new(config);
    p.touch_start(&[c(0.0)], 0.0);
    p.touch_move(&[c(45.0)], 0.0);
    assert_eq!(p.status().pull_distance, 45.0);
    assert!(p.touch_end());
}

// =============================================================
// Engine + surface
// =============================================================

#[test]
fn attach_registers_four_listeners() {
    let surface = MemorySurface::new();
    let attachment =
        attach_pull_to_refresh(Some(surface.clone()), PullHandlers::new(), PullToRefreshConfig::default())
            .unwrap()
            .unwrap();
    assert_eq!(attachment.listener_count(), 4);
    assert!(surface.listens_to(TouchPhase::Cancel));
}

#[test]
fn attach_without_surface_is_noop() {
    let result =
        attach_pull_to_refresh::<MemorySurface>(None, PullHandlers::new(), PullToRefreshConfig::default());
    assert!(result.unwrap().is_none());
}

#[test]
fn attach_rejects_invalid_config() {
    let surface = MemorySurface::new();
    let config = PullToRefreshConfig { resistance: 0.0, ..PullToRefreshConfig::default() };
    let result = attach_pull_to_refresh(Some(surface.clone()), PullHandlers::new(), config);
    assert!(matches!(result, Err(GestureError::InvalidConfig { field: "resistance", .. })));
    assert_eq!(surface.registrations_made(), 0);
}

#[test]
fn full_pull_refreshes_and_reports_status() {
    let surface = MemorySurface::new();
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let attachment =
        attach_pull_to_refresh(Some(surface.clone()), recording(&rec), PullToRefreshConfig::default())
            .unwrap()
            .unwrap();

    surface.dispatch(TouchPhase::Start, vec![c(0.0)]);
    let outcome = surface.dispatch(TouchPhase::Move, vec![c(100.0)]);
    assert!(outcome.prevent_default);
    surface.dispatch(TouchPhase::Move, vec![c(250.0)]);
    surface.dispatch(TouchPhase::End, vec![]);

    assert_eq!(rec.borrow().refreshes, 1);
    assert_eq!(
        rec.borrow().statuses,
        vec![
            PullStatus { is_pulling: true, pull_distance: 40.0, is_refreshing: false },
            PullStatus { is_pulling: true, pull_distance: 100.0, is_refreshing: false },
            PullStatus { is_pulling: true, pull_distance: 80.0, is_refreshing: true },
        ]
    );

    attachment.target().complete_refresh();
    assert_eq!(rec.borrow().statuses.last(), Some(&PullStatus::default()));
    assert_eq!(attachment.target().status(), PullStatus::default());
}

#[test]
fn scroll_offset_comes_from_surface() {
    let surface = MemorySurface::new();
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let _attachment =
        attach_pull_to_refresh(Some(surface.clone()), recording(&rec), PullToRefreshConfig::default()).unwrap();

    surface.set_scroll_top(200.0);
    surface.dispatch(TouchPhase::Start, vec![c(0.0)]);
    assert!(!surface.dispatch(TouchPhase::Move, vec![c(300.0)]).prevent_default);
    surface.dispatch(TouchPhase::End, vec![]);
    assert_eq!(rec.borrow().refreshes, 0);
    assert!(rec.borrow().statuses.is_empty());
}

#[test]
fn complete_refresh_without_refresh_is_silent() {
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let engine = PullToRefreshEngine::new(recording(&rec), PullToRefreshConfig::default());
    engine.complete_refresh();
    assert!(rec.borrow().statuses.is_empty());
}

#[test]
fn detach_releases_handlers() {
    let surface = MemorySurface::new();
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let attachment =
        attach_pull_to_refresh(Some(surface.clone()), recording(&rec), PullToRefreshConfig::default())
            .unwrap()
            .unwrap();
    attachment.detach();
    assert_eq!(Rc::strong_count(&rec), 1);
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn set_handlers_swaps_callbacks() {
    let first = Rc::new(RefCell::new(Recorder::default()));
    let second = Rc::new(RefCell::new(Recorder::default()));
    let engine = PullToRefreshEngine::new(recording(&first), PullToRefreshConfig::default());
    engine.set_handlers(recording(&second));

    engine.handle(&TouchInput::new(TouchPhase::Start, vec![c(0.0)]));
    engine.handle(&TouchInput::new(TouchPhase::Move, vec![c(300.0)]));
    engine.handle(&TouchInput::new(TouchPhase::End, vec![]));

    assert_eq!(first.borrow().refreshes, 0);
    assert_eq!(second.borrow().refreshes, 1);
}
