//! Core domain: tests for display scaling and camera placement.

use bevy::prelude::*;

use super::{CameraOffset, DisplayScale, FollowCamera, ScreenRect};

#[test]
fn test_display_scale_dsc_and_sc() {
    let scale = DisplayScale::new(2.0);
    assert_eq!(scale.dsc(0.2), 0.4);
    assert_eq!(scale.dsc(-5.0), -10.0);
    assert_eq!(scale.sc(20), 40);

    let odd = DisplayScale::new(1.5);
    // 7 * 1.5 = 10.5 rounds away from zero
    assert_eq!(odd.sc(7), 11);
}

#[test]
fn test_display_scale_rejects_non_positive_factor() {
    assert_eq!(DisplayScale::new(0.0), DisplayScale::default());
    assert_eq!(DisplayScale::new(-3.0).factor, 1.0);
    assert_eq!(DisplayScale::new(f32::NAN).factor, 1.0);
}

#[test]
fn test_follow_camera_centers_target() {
    let mut camera = FollowCamera {
        viewport: Vec2::new(200.0, 100.0),
        ..default()
    };
    camera.follow(Vec2::new(500.0, 300.0), Vec2::new(1000.0, 1000.0));
    assert_eq!(camera.offset_x(), 400.0);
    assert_eq!(camera.offset_y(), 250.0);
}

#[test]
fn test_follow_camera_clamps_to_level_bounds() {
    let mut camera = FollowCamera {
        viewport: Vec2::new(200.0, 100.0),
        ..default()
    };

    camera.follow(Vec2::new(10.0, 10.0), Vec2::new(1000.0, 400.0));
    assert_eq!((camera.x, camera.y), (0.0, 0.0));

    camera.follow(Vec2::new(990.0, 390.0), Vec2::new(1000.0, 400.0));
    assert_eq!((camera.x, camera.y), (800.0, 300.0));

    // Level smaller than the window pins the camera at the origin
    camera.follow(Vec2::new(50.0, 50.0), Vec2::new(100.0, 80.0));
    assert_eq!((camera.x, camera.y), (0.0, 0.0));
}

#[test]
fn test_screen_rect_view_translation() {
    let rect = ScreenRect::new(0, 0, 20, 20);
    let viewport = Vec2::new(200.0, 100.0);
    assert_eq!(
        rect.view_translation(viewport, 5.0),
        Vec3::new(-90.0, 40.0, 5.0)
    );
    assert_eq!(rect.size(), Vec2::new(20.0, 20.0));
}
