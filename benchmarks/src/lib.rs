//! Shared setup helpers for tether benchmarks.
//!
//! ## Running
//!
//! Rope benchmarks (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench rope
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench rope -- raycast
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench rope -- edge

use glam::Vec3;
use tether::{RigidBody, Rope, RopeConfig, StaticScene, SurfaceFilter, SurfaceShape};

/// Ground plane plus a single ledge the rope can wrap around.
pub fn setup_ledge_scene() -> StaticScene {
    let mut scene = StaticScene::new();
    scene.add(
        SurfaceShape::Plane {
            normal: Vec3::Y,
            offset: -10.0,
        },
        SurfaceFilter::GROUND,
    );
    scene.add(
        SurfaceShape::Aabb {
            min: Vec3::new(0.0, 0.0, -5.0),
            max: Vec3::new(10.0, 2.0, 5.0),
        },
        SurfaceFilter::GROUND,
    );
    scene
}

/// Scene with `n` boxes in a grid layout, for ray cast scaling.
pub fn setup_cluttered_scene(n: usize) -> StaticScene {
    let mut scene = StaticScene::new();
    let cols = (n as f32).sqrt().ceil() as usize;

    for i in 0..n {
        let x = (i % cols) as f32 * 3.0;
        let z = (i / cols) as f32 * 3.0;
        scene.add(
            SurfaceShape::Aabb {
                min: Vec3::new(x, 0.0, z),
                max: Vec3::new(x + 1.0, 1.0, z + 1.0),
            },
            SurfaceFilter::GROUND,
        );
    }
    scene
}

/// World with one dynamic body hanging from a rope anchored to the ledge.
///
/// The body starts offset sideways with some speed, so ticking the rope
/// exercises the obstruction sweep, the taut solve and the dynamic point
/// update each step.
pub fn setup_swinging_rope(scene: &StaticScene) -> (hecs::World, Rope) {
    let mut world = hecs::World::new();
    let actor = world.spawn((RigidBody::new(Vec3::new(5.0, 8.0, 0.0)),));

    let mut rope = Rope::new(RopeConfig::default()).expect("default config is valid");
    rope.shoot(
        &world,
        scene,
        Vec3::new(5.0, 8.0, 0.0),
        Vec3::NEG_Y,
        Some(actor),
        Vec3::new(5.0, 8.0, 0.0),
    );

    {
        let rb = world
            .query_one_mut::<&mut RigidBody>(actor)
            .expect("actor spawned above");
        rb.linear_velocity = Vec3::new(-6.0, 0.0, 0.0);
    }
    (world, rope)
}
