use ai_bt::{Status, TreeBuilder};
use ai_core::{ManualClock, TimeSource};

#[derive(Debug, Default)]
struct Scene {
    clock: ManualClock,
    door_open: bool,
    steps: u32,
}

impl TimeSource for Scene {
    fn now(&self) -> f64 {
        self.clock.now()
    }
}

#[test]
fn condition_maps_predicate_to_status() {
    let mut tree = TreeBuilder::new()
        .condition("DoorOpen", |s: &Scene| s.door_open)
        .build();

    let mut scene = Scene::default();
    assert_eq!(tree.evaluate(&mut scene), Status::Failure);
    scene.door_open = true;
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
}

#[test]
fn action_returns_callback_status_and_mutates_context() {
    let mut tree = TreeBuilder::new()
        .action("Step", |s: &mut Scene| {
            s.steps += 1;
            if s.steps < 2 {
                Status::Running
            } else {
                Status::Success
            }
        })
        .build();

    let mut scene = Scene::default();
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
    assert_eq!(scene.steps, 2);
}

#[test]
fn perform_always_succeeds() {
    let mut tree = TreeBuilder::new()
        .perform("Open", |s: &mut Scene| s.door_open = true)
        .build();

    let mut scene = Scene::default();
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
    assert!(scene.door_open);
}

#[test]
fn wait_runs_until_duration_elapses_then_restarts() {
    let mut tree = TreeBuilder::new().wait_for("Pause", 1.0).build();
    let mut scene = Scene::default();

    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(0.5);
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(0.5);
    assert_eq!(tree.evaluate(&mut scene), Status::Success);

    // A fresh wait starts on the next entry.
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(0.75);
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(0.25);
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
}

#[test]
fn wait_reset_restarts_the_timer() {
    let mut tree = TreeBuilder::new().wait_for("Pause", 2.0).build();
    let mut scene = Scene::default();

    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(1.5);
    tree.reset();
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(1.5);
    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.clock.advance(0.5);
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
}

#[test]
fn wait_accepts_a_custom_clock() {
    let mut tree = TreeBuilder::new()
        .wait("StepWait", 3.0, |s: &Scene| f64::from(s.steps))
        .build();
    let mut scene = Scene::default();

    assert_eq!(tree.evaluate(&mut scene), Status::Running);
    scene.steps = 3;
    assert_eq!(tree.evaluate(&mut scene), Status::Success);
}

#[test]
fn zero_length_wait_succeeds_immediately() {
    let mut tree = TreeBuilder::new().wait_for("Blink", 0.0).build();
    assert_eq!(tree.evaluate(&mut Scene::default()), Status::Success);
}
