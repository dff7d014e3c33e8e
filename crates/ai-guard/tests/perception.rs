use ai_guard::{ConePerception, Perception, VisionCone};
use ai_nav::Vec3;

#[test]
fn cone_checks_distance_and_angle() {
    let cone = VisionCone::new(10.0, 60.0);
    let sight = |_: Vec3, _: Vec3| true;

    assert!(cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(0.0, 0.0, 5.0), &sight));
    assert!(!cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(0.0, 0.0, 11.0), &sight));
    // 45 degrees off axis is outside a 60 degree cone.
    assert!(!cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(5.0, 0.0, 5.0), &sight));
    // Behind.
    assert!(!cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(0.0, 0.0, -2.0), &sight));
}

#[test]
fn blocked_line_of_sight_hides_target() {
    let cone = VisionCone::new(10.0, 60.0);
    let wall = |_: Vec3, to: Vec3| to.z < 3.0;

    assert!(cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(0.0, 0.0, 2.0), &wall));
    assert!(!cone.sees(Vec3::ZERO, Vec3::FORWARD, Vec3::new(0.0, 0.0, 5.0), &wall));
}

#[test]
fn cone_perception_follows_pose() {
    let mut perception = ConePerception::new(VisionCone::new(10.0, 90.0));
    assert!(!perception.can_perceive_target());

    perception.set_target(Some(Vec3::new(5.0, 0.0, 0.0)));
    assert!(!perception.can_perceive_target());
    assert_eq!(perception.target_position(), Some(Vec3::new(5.0, 0.0, 0.0)));

    perception.set_pose(Vec3::ZERO, Vec3::from_yaw_degrees(90.0));
    assert!(perception.can_perceive_target());
}
