use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    A,
    B,
}

#[test]
fn fires_in_due_time_then_insertion_order() {
    let mut tl: Timeline<Key, &str> = Timeline::new();
    tl.schedule(Key::A, 0.2, "late");
    tl.schedule(Key::A, 0.1, "early");
    tl.schedule(Key::B, 0.1, "early-second");
    assert_eq!(tl.advance(0.05), Vec::<&str>::new());
    assert_eq!(tl.advance(0.20), vec!["early", "early-second", "late"]);
    assert!(tl.is_idle());
}

#[test]
fn cancel_removes_only_its_key() {
    let mut tl: Timeline<Key, u32> = Timeline::new();
    tl.schedule(Key::A, 0.1, 1);
    tl.schedule(Key::B, 0.1, 2);
    tl.schedule(Key::A, 0.2, 3);
    assert_eq!(tl.cancel(Key::A), 2);
    assert_eq!(tl.advance(1.0), vec![2]);
}

#[test]
fn cancelled_events_never_fire_after_reschedule() {
    // Retrigger discipline: cancelling then rescheduling must not leak the
    // old batch.
    let mut tl: Timeline<Key, u32> = Timeline::new();
    tl.schedule(Key::A, 0.3, 1);
    tl.advance(0.1);
    tl.cancel(Key::A);
    tl.schedule(Key::A, 0.3, 2);
    assert_eq!(tl.advance(0.25), Vec::<u32>::new());
    assert_eq!(tl.advance(0.10), vec![2]);
}

#[test]
fn zero_and_negative_delays_fire_next_advance() {
    let mut tl: Timeline<Key, u32> = Timeline::new();
    tl.schedule(Key::A, 0.0, 1);
    tl.schedule(Key::A, -5.0, 2);
    tl.schedule(Key::A, f64::NAN, 3);
    assert_eq!(tl.advance(0.0), vec![1, 2, 3]);
}

#[test]
fn cancel_all_empties_the_queue() {
    let mut tl: Timeline<Key, u32> = Timeline::new();
    tl.schedule(Key::A, 0.1, 1);
    tl.schedule(Key::B, 0.1, 2);
    tl.cancel_all();
    assert!(tl.is_idle());
    assert_eq!(tl.advance(1.0), Vec::<u32>::new());
}
