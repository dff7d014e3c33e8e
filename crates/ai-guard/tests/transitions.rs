mod common;

use ai_bt::TreeBuilder;
use ai_core::TimeSource;
use ai_guard::{CountingSink, GuardContext, GuardState};
use ai_nav::Vec3;
use common::{guard, quick_config, route, Frames, RcSink, Scripted, StubNavigator};

#[test]
fn full_pursuit_cycle() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(1.0);
    let seen_at = Vec3::new(0.0, 0.0, 20.0);

    assert_eq!(frames.step(&mut g), GuardState::Patrol);
    assert_eq!(g.navigator().destination, Some(route()[0]));

    g.perception_mut().show(seen_at);
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    assert_eq!(g.memory().last_known_position, Some(seen_at));
    assert_eq!(g.memory().chase_time_remaining, 2.0);
    assert_eq!(g.navigator().destination, Some(seen_at));
    assert_eq!(g.navigator().speed_multiplier, 1.5);
    assert_eq!(g.sink().spotted, 1);

    // Lost sight; persistence keeps the chase going for two more frames.
    g.perception_mut().hide();
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    assert_eq!(g.memory().chase_time_remaining, 1.0);
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    assert_eq!(g.memory().chase_time_remaining, 0.0);

    assert_eq!(frames.step(&mut g), GuardState::Search);
    assert_eq!(g.navigator().destination, Some(seen_at));
    assert_eq!(g.memory().search_time_remaining, 1.0);
    assert_eq!(g.navigator().speed_multiplier, 0.8);

    assert_eq!(frames.step(&mut g), GuardState::Search);
    assert_eq!(g.memory().search_time_remaining, 0.0);

    assert_eq!(frames.step(&mut g), GuardState::ReturnToPatrol);
    assert_eq!(g.navigator().destination, Some(route()[0]));
    assert!(g.memory().has_last_known_position());

    // Still travelling.
    assert_eq!(frames.step(&mut g), GuardState::ReturnToPatrol);

    g.navigator_mut().reached = true;
    assert_eq!(frames.step(&mut g), GuardState::Patrol);
    assert_eq!(g.memory().last_known_position, None);
    assert!(!g.memory().alert_raised);
    assert_eq!(g.sink().spotted, 1);
    assert_eq!(g.sink().caught, 0);
}

#[test]
fn seeing_the_target_again_resumes_the_chase() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(1.0);

    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    frames.step(&mut g);
    g.perception_mut().hide();
    frames.step(&mut g);
    frames.step(&mut g);
    assert_eq!(frames.step(&mut g), GuardState::Search);

    let new_sighting = Vec3::new(5.0, 0.0, 20.0);
    g.perception_mut().show(new_sighting);
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    assert_eq!(g.memory().last_known_position, Some(new_sighting));
    assert_eq!(g.memory().chase_time_remaining, 2.0);
    // Alert is one-shot per pursuit.
    assert_eq!(g.sink().spotted, 1);
}

#[test]
fn visible_flag_without_target_is_not_perceived() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(1.0);

    g.perception_mut().visible = true;
    assert_eq!(frames.step(&mut g), GuardState::Patrol);
    assert_eq!(g.memory().last_known_position, None);
}

#[test]
fn look_around_sweeps_and_reverses() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(0.5);

    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    frames.step(&mut g);
    g.perception_mut().hide();
    // Persistence of 2s at 0.5s frames.
    for _ in 0..4 {
        assert_eq!(frames.step(&mut g), GuardState::Chase);
    }

    g.navigator_mut().reached = true;
    assert_eq!(frames.step(&mut g), GuardState::Search);
    let direction = g.memory().look_direction;
    assert_eq!(direction.abs(), 1.0);
    assert_eq!(g.navigator().rotated, 45.0 * direction);

    frames.step(&mut g);
    // Hit the 90 degree sweep and turned around.
    assert_eq!(g.navigator().rotated, 90.0 * direction);
    assert_eq!(g.memory().look_direction, -direction);
}

#[test]
fn look_direction_is_deterministic() {
    let run = || {
        let mut g = guard(quick_config(), route()).with_agent_id(42);
        let mut frames = Frames::new(1.0);
        g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
        frames.step(&mut g);
        g.perception_mut().hide();
        while frames.step(&mut g) != GuardState::Search {}
        g.memory().look_direction
    };
    assert_eq!(run(), run());
}

#[test]
fn transitions_are_traced() {
    let sink = RcSink::default();
    let events = sink.0.clone();
    let mut g = guard(quick_config(), route()).with_trace_sink(sink);
    let mut frames = Frames::new(1.0);

    frames.step(&mut g);
    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    frames.step(&mut g);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].tag, "guard.transition");
    assert_eq!(events[0].tick, 1);
    assert_eq!(events[0].a, GuardState::Patrol.code());
    assert_eq!(events[0].b, GuardState::Chase.code());
}

#[test]
fn reset_returns_to_patrol() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(1.0);

    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    assert_eq!(frames.step(&mut g), GuardState::Chase);

    g.reset();
    assert_eq!(g.state(), GuardState::Patrol);
    assert_eq!(g.memory().last_known_position, None);

    g.perception_mut().hide();
    assert_eq!(frames.step(&mut g), GuardState::Patrol);
    assert_eq!(g.navigator().destination, Some(route()[0]));
}

#[test]
fn debug_toggle_does_not_change_decisions() {
    let mut plain = guard(quick_config(), route());
    let mut traced = guard(quick_config(), route());
    traced.set_debug_enabled(true);
    assert!(traced.is_debug_enabled());

    let mut a = Frames::new(1.0);
    let mut b = Frames::new(1.0);
    for frame in 0..10 {
        let visible = frame == 2;
        for g in [&mut plain, &mut traced] {
            if visible {
                g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
            } else {
                g.perception_mut().hide();
            }
        }
        assert_eq!(a.step(&mut plain), b.step(&mut traced));
    }
}

#[test]
fn default_timers_hold_chase_for_three_seconds() {
    let mut g = guard(ai_guard::GuardConfig::default(), route());
    let mut frames = Frames::new(1.0);

    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    g.perception_mut().hide();

    let states: Vec<_> = (0..8).map(|_| frames.step(&mut g)).collect();
    assert_eq!(
        states,
        vec![
            GuardState::Chase,
            GuardState::Chase,
            GuardState::Chase,
            GuardState::Search,
            GuardState::Search,
            GuardState::Search,
            GuardState::ReturnToPatrol,
            GuardState::ReturnToPatrol,
        ]
    );
}

#[test]
fn return_is_reported_when_already_at_the_waypoint() {
    let sink = RcSink::default();
    let events = sink.0.clone();
    let mut g = guard(quick_config(), route()).with_trace_sink(sink);
    let mut frames = Frames::new(1.0);

    // The body counts as arrived wherever it is sent.
    g.navigator_mut().reached = true;
    g.perception_mut().show(Vec3::new(0.0, 0.0, 20.0));
    assert_eq!(frames.step(&mut g), GuardState::Chase);
    g.perception_mut().hide();

    let states: Vec<_> = (0..8).map(|_| frames.step(&mut g)).collect();
    assert_eq!(
        states,
        vec![
            GuardState::Chase,
            GuardState::Chase,
            GuardState::Search,
            GuardState::Search,
            GuardState::ReturnToPatrol,
            GuardState::Patrol,
            GuardState::Patrol,
            GuardState::Patrol,
        ]
    );
    assert_eq!(g.memory().last_known_position, None);

    let transitions: Vec<_> = events
        .borrow()
        .iter()
        .filter(|e| e.tag == "guard.transition")
        .map(|e| (e.a, e.b))
        .collect();
    assert!(transitions.contains(&(
        GuardState::Search.code(),
        GuardState::ReturnToPatrol.code()
    )));
    assert!(transitions.contains(&(
        GuardState::ReturnToPatrol.code(),
        GuardState::Patrol.code()
    )));
    assert!(!transitions.contains(&(GuardState::Search.code(), GuardState::Patrol.code())));
}

#[test]
fn guard_clock_follows_frame_deltas() {
    let mut g = guard(quick_config(), route());
    let mut frames = Frames::new(0.5);

    for _ in 0..4 {
        frames.step(&mut g);
    }
    assert_eq!(g.context().now(), 2.0);
    assert_eq!(g.memory().clock, 2.0);

    // Reset forgets the pursuit, not the time.
    g.reset();
    assert_eq!(g.context().now(), 2.0);
}

#[test]
fn guard_context_drives_wait_leaves() {
    let tree = TreeBuilder::<GuardContext<Scripted, StubNavigator, CountingSink>>::new()
        .wait_for("Pause", 1.0)
        .build();
    assert_eq!(tree.len(), 1);
    assert!(tree.find("Pause").is_some());
}
