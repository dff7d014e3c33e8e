#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ai_core::TickContext;
use ai_guard::{CountingSink, GuardConfig, GuardController, Perception};
use ai_nav::{Navigator, Vec3};
use ai_tools::{TraceEvent, TraceSink};

/// Perception whose answers the test sets directly.
#[derive(Debug, Default)]
pub struct Scripted {
    pub visible: bool,
    pub target: Option<Vec3>,
}

impl Scripted {
    pub fn show(&mut self, at: Vec3) {
        self.visible = true;
        self.target = Some(at);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Perception for Scripted {
    fn can_perceive_target(&self) -> bool {
        self.visible
    }

    fn target_position(&self) -> Option<Vec3> {
        self.target
    }
}

/// Navigator that never moves; arrival is whatever the test says.
#[derive(Debug, Default)]
pub struct StubNavigator {
    pub position: Vec3,
    pub destination: Option<Vec3>,
    pub reached: bool,
    pub speed_multiplier: f32,
    pub rotated: f32,
    pub destinations_issued: u32,
}

impl Navigator for StubNavigator {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
        self.destinations_issued += 1;
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn has_reached_destination(&self) -> bool {
        self.reached
    }

    fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    fn rotate_by(&mut self, yaw_degrees: f32) {
        self.rotated += yaw_degrees;
    }
}

#[derive(Clone, Default)]
pub struct RcSink(pub Rc<RefCell<Vec<TraceEvent>>>);

impl TraceSink for RcSink {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

pub type TestGuard = GuardController<Scripted, StubNavigator, CountingSink>;

pub fn route() -> Vec<Vec3> {
    vec![Vec3::new(0.0, 0.0, 10.0), Vec3::new(10.0, 0.0, 10.0)]
}

/// Short timers and a one-second frame keep scenarios readable.
pub fn quick_config() -> GuardConfig {
    GuardConfig {
        chase_persistence: 2.0,
        search_duration: 2.0,
        ..GuardConfig::default()
    }
}

pub fn guard(config: GuardConfig, route: Vec<Vec3>) -> TestGuard {
    GuardController::new(
        config,
        route,
        Scripted::default(),
        StubNavigator::default(),
        CountingSink::default(),
    )
    .expect("valid config")
}

pub struct Frames(TickContext);

impl Frames {
    pub fn new(dt: f32) -> Self {
        Self(TickContext::new(0, dt).with_seed(7))
    }

    pub fn step(&mut self, guard: &mut TestGuard) -> ai_guard::GuardState {
        let state = guard.evaluate(&self.0);
        self.0 = self.0.next();
        state
    }
}
