#![cfg(feature = "serde")]

use ai_nav::Vec3;

#[test]
fn vec3_roundtrips_via_serde() {
    let route = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.5, 0.0, -2.0)];

    let json = serde_json::to_string(&route).expect("serialize route");
    let back: Vec<Vec3> = serde_json::from_str(&json).expect("deserialize route");

    assert_eq!(back, route);
}
