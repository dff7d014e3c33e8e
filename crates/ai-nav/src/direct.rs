use crate::{Navigator, Vec3};

/// Straight-line mover: no obstacles, no acceleration.
///
/// Destinations are only recorded by [`Navigator::set_destination`]; the body moves when the
/// host calls [`step`](DirectNavigator::step). While moving it faces its direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectNavigator {
    position: Vec3,
    yaw_degrees: f32,
    destination: Option<Vec3>,
    base_speed: f32,
    speed_multiplier: f32,
    arrival_distance: f32,
}

impl DirectNavigator {
    pub fn new(position: Vec3, base_speed: f32, arrival_distance: f32) -> Self {
        Self {
            position,
            yaw_degrees: 0.0,
            destination: None,
            base_speed: base_speed.max(0.0),
            speed_multiplier: 1.0,
            arrival_distance: arrival_distance.max(0.0),
        }
    }

    pub fn with_yaw(mut self, yaw_degrees: f32) -> Self {
        self.yaw_degrees = yaw_degrees;
        self
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    pub fn speed(&self) -> f32 {
        self.base_speed * self.speed_multiplier
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Teleport, e.g. when the host spawns or respawns the body.
    pub fn warp(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Advance the body by `dt` seconds towards its destination.
    pub fn step(&mut self, dt: f32) {
        let Some(destination) = self.destination else {
            return;
        };
        if self.has_reached_destination() || dt <= 0.0 {
            return;
        }

        let heading = (destination - self.position).flat();
        if heading.normalized().is_some() {
            self.yaw_degrees = heading.yaw_degrees();
        }
        self.position = self.position.move_towards(destination, self.speed() * dt);
    }
}

impl Navigator for DirectNavigator {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn has_reached_destination(&self) -> bool {
        match self.destination {
            Some(destination) => self.position.distance(destination) <= self.arrival_distance,
            None => true,
        }
    }

    fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier.max(0.0);
    }

    fn rotate_by(&mut self, yaw_degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + yaw_degrees).rem_euclid(360.0);
    }

    fn forward(&self) -> Vec3 {
        Vec3::from_yaw_degrees(self.yaw_degrees)
    }
}
