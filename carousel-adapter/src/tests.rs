use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use virtual_carousel::{Carousel, CarouselItem, CarouselOptions, Point, Resolution, Transition};

#[derive(Clone, Debug, PartialEq)]
struct Photo {
    id: u64,
}

impl CarouselItem for Photo {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

fn photos(ids: impl IntoIterator<Item = u64>) -> Vec<Photo> {
    ids.into_iter().map(|id| Photo { id }).collect()
}

// One item is 400px wide.
fn options() -> CarouselOptions<Photo> {
    CarouselOptions::new().with_viewport_width(400.0)
}

const ORIGIN: Point = Point::new(200.0, 100.0);

fn drag(c: &mut Controller<Photo>, delta_x: f32, now_ms: u64) {
    c.on_touch_start(ORIGIN, now_ms);
    c.on_touch_move(Point::new(ORIGIN.x + delta_x / 2.0, ORIGIN.y));
    c.on_touch_move(Point::new(ORIGIN.x + delta_x, ORIGIN.y));
}

#[test]
fn init_timer_enables_transitions_after_delay() {
    let mut c = Controller::mount(photos(0..10), options(), 1_000);
    assert!(c.is_initializing());
    assert!(c.has_pending_init());
    assert_eq!(c.render(1_000, |_, _| ()).transition, Transition::None);

    assert_eq!(c.tick(1_049), None);
    assert!(c.is_initializing());

    assert_eq!(c.tick(1_050), None);
    assert!(!c.is_initializing());
    assert!(!c.has_pending_init());
    assert_eq!(c.render(1_050, |_, _| ()).transition, Transition::EaseOut {
        duration_ms: 300
    });
}

#[test]
fn release_during_init_settles_instantly() {
    let mut c = Controller::mount(photos(0..10), options(), 0);
    drag(&mut c, -100.0, 10);
    assert!(c.on_touch_end(500).is_committed());
    assert!(!c.is_animating());
    assert_eq!(c.translation(500), -400.0);
}

#[test]
fn snap_tween_follows_a_committed_swipe() {
    let mut c = Controller::mount(photos(0..10), options(), 0);
    c.tick(100);

    drag(&mut c, -100.0, 200);
    assert_eq!(c.translation(250), -100.0);
    assert_eq!(c.render(250, |_, _| ()).transition, Transition::None);

    assert_eq!(c.on_touch_end(300), Resolution::Committed {
        previous: 0,
        current: 1
    });
    assert!(c.is_animating());
    assert_eq!(c.render(300, |_, _| ()).transition, Transition::None);

    let mut last = c.tick(300).unwrap();
    assert_eq!(last, -100.0);
    for now_ms in [320, 360, 420, 500, 560] {
        let off = c.tick(now_ms).unwrap();
        assert!(off <= last);
        assert!(off >= -400.0);
        last = off;
    }
    assert_eq!(c.tick(600), Some(-400.0));
    assert!(!c.is_animating());
    assert_eq!(c.tick(616), None);
    assert_eq!(c.translation(616), -400.0);
}

#[test]
fn snap_back_animates_a_reverted_drag() {
    let mut c = Controller::mount(photos(0..10), options().with_default_current(3), 0);
    c.tick(50);
    drag(&mut c, -20.0, 1_000);
    assert_eq!(c.on_touch_end(2_000), Resolution::Reverted);
    assert!(c.is_animating());
    assert_eq!(c.tick(2_000), Some(-1_220.0));
    assert_eq!(c.tick(2_300), Some(-1_200.0));
}

#[test]
fn touch_start_cancels_snap() {
    let mut c = Controller::mount(photos(0..10), options(), 0);
    c.tick(50);
    drag(&mut c, -100.0, 100);
    c.on_touch_end(150);
    assert!(c.is_animating());

    c.on_touch_start(ORIGIN, 160);
    assert!(!c.is_animating());
    assert!(c.carousel().is_dragging());
}

#[test]
fn controlled_sync_animates_to_host_index() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let options = CarouselOptions::controlled(0)
        .with_viewport_width(400.0)
        .with_on_change(Some(move |index: usize, photo: &Photo| {
            sink.lock().unwrap().push((index, photo.id));
        }));
    let mut c = Controller::mount(photos(0..10), options, 0);
    c.tick(50);

    drag(&mut c, -100.0, 100);
    assert!(c.on_touch_end(150).is_committed());
    assert_eq!(*log.lock().unwrap(), [(1, 1)]);
    assert_eq!(c.carousel().current_index(), Some(0));

    // The host adopts the change mid-snap; the running tween retargets from where it is.
    let from = c.translation(200);
    assert!(from < 0.0 && from > -100.0);
    assert!(c.sync_current(1, 200));
    assert!(c.is_animating());
    assert_eq!(c.translation(200), from);
    let mid = c.tick(350).unwrap();
    assert!(mid < from && mid > -400.0);
    assert_eq!(c.tick(500), Some(-400.0));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().current_index(), Some(1));
}

#[test]
fn controlled_sync_during_drag_keeps_tracking_the_finger() {
    let options = CarouselOptions::controlled(3).with_viewport_width(400.0);
    let mut c = Controller::mount(photos(0..10), options, 0);
    c.tick(50);

    c.on_touch_start(ORIGIN, 100);
    c.on_touch_move(Point::new(ORIGIN.x - 20.0, ORIGIN.y));
    assert!(c.sync_current(4, 120));
    assert!(!c.is_animating());
    c.on_touch_move(Point::new(ORIGIN.x - 120.0, ORIGIN.y));

    assert_eq!(c.carousel().translation(), -1_720.0);
    assert_eq!(c.translation(130), c.carousel().translation());
    assert_eq!(c.tick(130), None);
    let out = c.render(130, |_, _| ());
    assert_eq!(out.translation, -1_720.0);
    assert_eq!(out.transition, Transition::None);

    // The release snaps from the dragged position, not from a stale tween.
    assert_eq!(c.on_touch_end(2_000), Resolution::Committed {
        previous: 4,
        current: 5
    });
    assert!(c.is_animating());
    assert_eq!(c.tick(2_000), Some(-1_720.0));
    assert_eq!(c.tick(2_300), Some(-1_600.0));
}

#[test]
fn go_to_is_animated_and_notifies() {
    let mut c = Controller::mount(photos(0..10), options(), 0);
    c.tick(50);
    assert_eq!(c.go_to(2, 100), Resolution::Committed {
        previous: 0,
        current: 2
    });
    assert!(c.is_animating());
    assert_eq!(c.tick(400), Some(-800.0));
    assert!(!c.sync_current(5, 500));
}

#[test]
fn unmount_releases_pending_work() {
    let mut c = Controller::mount(photos(0..10), options().with_default_current(4), 0);
    drag(&mut c, -150.0, 10);
    assert!(c.has_pending_init());

    let carousel = c.unmount();
    assert!(carousel.is_initializing());
    assert!(!carousel.is_dragging());
    assert_eq!(carousel.current_index(), Some(4));
}

#[test]
fn render_materializes_only_keyed_window_slots() {
    let c = Controller::mount(photos(0..1_000), options().with_default_current(500), 0);
    let mut calls = 0;
    let out = c.render(0, |photo, index| {
        calls += 1;
        (photo.id, index)
    });
    assert_eq!(calls, 3);
    assert_eq!(out.placeholder_width, 499.0 * 400.0);
    assert_eq!(out.translation, -500.0 * 400.0);
    let keys: Vec<u64> = out.slots.iter().map(|s| s.key).collect();
    assert_eq!(keys, [499, 500, 501]);
    assert!(out.slots.iter().all(|s| s.width == 400.0));
    assert_eq!(out.slots[1].content, (500, 500));

    let standalone = render(c.carousel(), |_, index| index);
    assert_eq!(standalone.slots.len(), 3);
    assert_eq!(standalone.translation, out.translation);

    let empty = Controller::mount(Vec::new(), options(), 0);
    assert!(empty.render(0, |_: &Photo, _| ()).slots.is_empty());
}

#[test]
fn replace_list_keeps_current_item() {
    let mut c = Controller::mount(photos(0..5), options().with_default_current(2), 0);

    let prepended = photos([100, 101, 102].into_iter().chain(0..5));
    assert_eq!(c.replace_list(prepended), Some(5));
    assert_eq!(c.carousel().current_index(), Some(5));
    assert_eq!(c.carousel().current_item().map(|p| p.id), Some(2));

    assert_eq!(c.replace_list(photos(10..12)), None);
    assert_eq!(c.carousel().current_index(), Some(1));
}

#[test]
fn anchor_requires_matching_key() {
    let mut carousel = Carousel::new(photos(0..10), options().with_default_current(3));
    let anchor = capture_current_anchor(&carousel).unwrap();
    assert_eq!(anchor.key, 3);
    assert_eq!(anchor.index, 3);

    assert_eq!(apply_anchor(&mut carousel, &anchor, |_| Some(7)), None);
    assert_eq!(apply_anchor(&mut carousel, &anchor, |_| None), None);
    assert_eq!(carousel.current_index(), Some(3));

    carousel.set_list(photos((0..10).rev()));
    let list = carousel.list().to_vec();
    assert_eq!(
        apply_anchor(&mut carousel, &anchor, |k| find_key_index(&list, k)),
        Some(6)
    );
    assert_eq!(carousel.current_item(), Some(&Photo { id: 3 }));

    let empty: Carousel<Photo> = Carousel::new(Vec::new(), options());
    assert!(capture_current_anchor(&empty).is_none());
}

#[test]
fn one_shot_fires_once() {
    let mut t = OneShot::new(100, 50);
    assert_eq!(t.deadline_ms(), 150);
    assert!(!t.poll(149));
    assert!(t.is_pending());
    assert!(t.poll(400));
    assert!(!t.poll(500));
    assert!(!t.is_pending());
}

#[test]
fn debounce_fires_after_quiet_period() {
    let mut d = Debounce::new(100);
    assert!(!d.poll(0));

    d.trigger(0);
    d.trigger(80);
    assert!(!d.poll(150));
    assert!(d.poll(180));
    assert!(!d.poll(300));

    d.trigger(400);
    d.cancel();
    assert!(!d.is_pending());
    assert!(!d.poll(1_000));
}

#[test]
fn throttle_limits_rate() {
    let mut t = Throttle::new(16);
    assert!(t.ready(0));
    assert!(!t.ready(10));
    assert!(t.ready(16));
    assert!(!t.ready(31));
    t.reset();
    assert!(t.ready(31));
}

#[test]
fn tween_samples_and_retargets() {
    let mut tw = Tween::new(0.0, -400.0, 0, 100, Easing::Linear);
    assert_eq!(tw.sample(0), 0.0);
    assert_eq!(tw.sample(50), -200.0);
    assert_eq!(tw.sample(100), -400.0);
    assert!(tw.is_done(100));

    tw.retarget(50, -800.0, 100);
    assert_eq!(tw.from, -200.0);
    assert_eq!(tw.sample(150), -800.0);

    assert_eq!(Easing::EaseOut.sample(0.0), 0.0);
    assert_eq!(Easing::EaseOut.sample(1.0), 1.0);
    assert!(Easing::EaseOut.sample(0.5) > 0.5);
    assert_eq!(Easing::EaseInOut.sample(0.5), 0.5);
    assert_eq!(Tween::new(1.0, 2.0, 0, 0, Easing::Linear).duration_ms, 1);
}
