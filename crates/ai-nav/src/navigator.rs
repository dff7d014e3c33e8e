use crate::Vec3;

/// The movement collaborator as seen from decision code.
///
/// Decision code issues destinations and polls for arrival; it never drives the body
/// directly. Implementations are expected to be cheap to query every tick.
pub trait Navigator {
    /// Current position of the agent's body.
    fn position(&self) -> Vec3;

    /// Replace the current destination. Calling this every tick with the same point is fine.
    fn set_destination(&mut self, destination: Vec3);

    fn destination(&self) -> Option<Vec3>;

    /// True once the body is within arrival range of the destination, and when no destination
    /// has been issued.
    fn has_reached_destination(&self) -> bool;

    /// Scale applied to the body's base movement speed.
    fn set_speed_multiplier(&mut self, _multiplier: f32) {}

    /// Turn in place around the up axis. Bodies that cannot turn independently ignore this.
    fn rotate_by(&mut self, _yaw_degrees: f32) {}

    /// Direction the body is facing on the ground plane.
    fn forward(&self) -> Vec3 {
        Vec3::FORWARD
    }
}
