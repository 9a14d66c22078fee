use super::*;

use std::time::Instant;

fn sequence(frames: usize) -> AnimationSequence {
    AnimationSequence::new(
        (0..frames)
            .map(|i| CharacterGrid::from_rows(vec![format!("frame-{i}")]))
            .collect(),
    )
}

#[test]
fn new_clock_is_stopped_at_frame_zero() {
    let clock = PlaybackClock::with_sequence(sequence(3));
    assert_eq!(clock.index(), 0);
    assert!(!clock.is_running());
    assert_eq!(clock.fps(), DEFAULT_FPS);
    assert_eq!(clock.current_frame().unwrap().rows()[0], "frame-0");
}

#[test]
fn advances_one_frame_per_elapsed_period_and_wraps() {
    let mut clock = PlaybackClock::with_sequence(sequence(3));
    clock.play();

    let t0 = Instant::now();
    clock.update_at(t0); // arms the timer
    assert_eq!(clock.index(), 0);

    let period = clock.period();
    clock.update_at(t0 + period);
    assert_eq!(clock.index(), 1);
    clock.update_at(t0 + period * 2);
    assert_eq!(clock.index(), 2);
    clock.update_at(t0 + period * 3);
    assert_eq!(clock.index(), 0);
}

#[test]
fn sub_period_updates_do_not_advance() {
    let mut clock = PlaybackClock::with_sequence(sequence(3));
    clock.play();

    let t0 = Instant::now();
    clock.update_at(t0);
    clock.update_at(t0 + clock.period() / 2);
    assert_eq!(clock.index(), 0);
}

#[test]
fn stop_halts_without_resetting_the_index() {
    let mut clock = PlaybackClock::with_sequence(sequence(3));
    clock.play();

    let t0 = Instant::now();
    clock.update_at(t0);
    let period = clock.period();
    clock.update_at(t0 + period);
    assert_eq!(clock.index(), 1);

    clock.stop();
    assert!(!clock.is_running());

    // No amount of elapsed time moves the index once stopped.
    clock.update_at(t0 + period * 10);
    assert_eq!(clock.index(), 1);
}

#[test]
fn seeks_wrap_in_both_directions_regardless_of_running_state() {
    let mut clock = PlaybackClock::with_sequence(sequence(3));
    assert!(!clock.is_running());

    clock.seek_backward();
    assert_eq!(clock.index(), 2);
    clock.seek_forward();
    assert_eq!(clock.index(), 0);
    clock.seek_forward();
    assert_eq!(clock.index(), 1);

    clock.play();
    clock.seek_forward();
    assert_eq!(clock.index(), 2);
    assert!(clock.is_running());
}

#[test]
fn set_sequence_resets_index_and_stops_playback() {
    let mut clock = PlaybackClock::with_sequence(sequence(5));
    clock.play();
    clock.seek_forward();
    clock.seek_forward();
    clock.seek_forward();
    assert_eq!(clock.index(), 3);

    clock.set_sequence(sequence(2));
    assert_eq!(clock.index(), 0);
    assert!(!clock.is_running());
    assert_eq!(clock.sequence().len(), 2);
}

#[test]
fn period_derives_from_fps_and_clamps_to_one_millisecond() {
    let mut clock = PlaybackClock::new();
    assert_eq!(clock.period().as_millis(), 83); // round(1000 / 12)

    clock.set_fps(50.0);
    assert_eq!(clock.period().as_millis(), 20);

    clock.set_fps(100_000.0);
    assert_eq!(clock.period().as_millis(), 1);
}

#[test]
fn invalid_fps_falls_back_to_default() {
    let mut clock = PlaybackClock::new();
    for bad in [0.0, -24.0, f64::NAN, f64::INFINITY] {
        clock.set_fps(bad);
        assert_eq!(clock.fps(), DEFAULT_FPS);
    }
}

#[test]
fn empty_sequence_never_runs() {
    let mut clock = PlaybackClock::new();
    clock.play();
    assert!(!clock.is_running());
    assert!(clock.current_frame().is_none());

    clock.seek_forward();
    clock.seek_backward();
    assert_eq!(clock.index(), 0);

    clock.update_at(Instant::now());
    assert_eq!(clock.index(), 0);
}
