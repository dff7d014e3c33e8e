use ai_nav::Vec3;

/// What the guard knows about its target, answered fresh on every query.
pub trait Perception {
    fn can_perceive_target(&self) -> bool;

    /// Where the target is right now, or `None` when there is no target at all.
    fn target_position(&self) -> Option<Vec3>;
}

/// Occlusion test between two points.
pub trait LineOfSight {
    fn is_clear(&self, from: Vec3, to: Vec3) -> bool;
}

/// Nothing ever blocks the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearSight;

impl LineOfSight for ClearSight {
    fn is_clear(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }
}

impl<F: Fn(Vec3, Vec3) -> bool> LineOfSight for F {
    fn is_clear(&self, from: Vec3, to: Vec3) -> bool {
        self(from, to)
    }
}

/// Distance + view-angle visibility check on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionCone {
    pub view_distance: f32,
    /// Full opening angle in degrees.
    pub view_angle: f32,
}

impl VisionCone {
    pub fn new(view_distance: f32, view_angle: f32) -> Self {
        Self {
            view_distance,
            view_angle,
        }
    }

    /// True when `target` is within range, inside the cone around `forward`, and `sight`
    /// reports a clear line from `eye` to it.
    pub fn sees(&self, eye: Vec3, forward: Vec3, target: Vec3, sight: &impl LineOfSight) -> bool {
        let to_target = target - eye;
        if to_target.length() > self.view_distance {
            return false;
        }
        // Standing on top of the target counts as seeing it.
        if to_target.flat().normalized().is_some()
            && forward.flat().angle_degrees(to_target.flat()) > self.view_angle * 0.5
        {
            return false;
        }
        sight.is_clear(eye, target)
    }
}

/// Reference [`Perception`]: a vision cone looking out from a pose the host keeps current.
#[derive(Debug, Clone)]
pub struct ConePerception<L = ClearSight> {
    cone: VisionCone,
    sight: L,
    eye: Vec3,
    forward: Vec3,
    target: Option<Vec3>,
}

impl ConePerception<ClearSight> {
    pub fn new(cone: VisionCone) -> Self {
        Self::with_sight(cone, ClearSight)
    }
}

impl<L: LineOfSight> ConePerception<L> {
    pub fn with_sight(cone: VisionCone, sight: L) -> Self {
        Self {
            cone,
            sight,
            eye: Vec3::ZERO,
            forward: Vec3::FORWARD,
            target: None,
        }
    }

    pub fn cone(&self) -> VisionCone {
        self.cone
    }

    /// Update the observer pose, normally copied from the navigator before each tick.
    pub fn set_pose(&mut self, eye: Vec3, forward: Vec3) {
        self.eye = eye;
        self.forward = forward;
    }

    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target;
    }
}

impl<L: LineOfSight> Perception for ConePerception<L> {
    fn can_perceive_target(&self) -> bool {
        match self.target {
            Some(target) => self.cone.sees(self.eye, self.forward, target, &self.sight),
            None => false,
        }
    }

    fn target_position(&self) -> Option<Vec3> {
        self.target
    }
}
