use blockfire_blocks::BlockTexture;
use blockfire_geom::Vec3;
use blockfire_world::{
    BlockPos, COLLISION_PAD, MAX_HIT_DISTANCE, RayHit, World, WorldError, collide,
};

fn world_with(blocks: &[(i32, i32, i32)]) -> World {
    let mut w = World::in_memory();
    for &(x, y, z) in blocks {
        w.add_block(BlockPos::new(x, y, z), BlockTexture::Stone, true).unwrap();
    }
    w
}

#[test]
fn ray_hits_first_block_with_previous_cell() {
    let w = world_with(&[(0, 0, 0)]);
    let hit = w
        .hit_test(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), MAX_HIT_DISTANCE)
        .unwrap();
    assert_eq!(
        hit,
        Some(RayHit {
            block: BlockPos::new(0, 0, 0),
            previous: Some(BlockPos::new(1, 0, 0)),
        })
    );
}

#[test]
fn ray_stops_at_nearer_block() {
    let w = world_with(&[(0, 0, 0), (2, 0, 0)]);
    let hit = w
        .hit_test(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), MAX_HIT_DISTANCE)
        .unwrap()
        .unwrap();
    assert_eq!(hit.block, BlockPos::new(2, 0, 0));
    assert_eq!(hit.previous, Some(BlockPos::new(3, 0, 0)));
}

#[test]
fn ray_misses_beyond_range() {
    let w = world_with(&[(10, 0, 0)]);
    let hit = w
        .hit_test(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), MAX_HIT_DISTANCE)
        .unwrap();
    assert_eq!(hit, None);
    let far = w.hit_test(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 12).unwrap();
    assert_eq!(far.map(|h| h.block), Some(BlockPos::new(10, 0, 0)));
}

#[test]
fn ray_starting_inside_a_block_has_no_previous() {
    let w = world_with(&[(0, 0, 0)]);
    let hit = w
        .hit_test(Vec3::new(0.1, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), MAX_HIT_DISTANCE)
        .unwrap()
        .unwrap();
    assert_eq!(hit.previous, None);
}

#[test]
fn ray_rejects_bad_input() {
    let w = world_with(&[(0, 0, 0)]);
    let nan = w.hit_test(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::UP, 8);
    assert!(matches!(nan, Err(WorldError::DomainError { op: "hit_test", .. })));
    let inf_dir = w.hit_test(Vec3::ZERO, Vec3::new(0.0, f32::INFINITY, 0.0), 8);
    assert!(matches!(inf_dir, Err(WorldError::DomainError { .. })));
    let far = w.hit_test(Vec3::new(0.0, 0.0, 3.0e6), Vec3::UP, 8);
    assert!(matches!(far, Err(WorldError::DomainError { .. })));
}

#[test]
fn falling_body_stops_on_ground() {
    let w = world_with(&[(0, -1, 0)]);
    let out = collide(&w, Vec3::new(0.0, -0.3, 0.0), 2, COLLISION_PAD).unwrap();
    assert!(out.vertical_contact);
    assert!((out.position.y - -0.25).abs() < 1e-6);
    assert_eq!(out.position.x, 0.0);
    assert_eq!(out.position.z, 0.0);
}

#[test]
fn lower_body_cell_rests_on_ground_two_below() {
    let w = world_with(&[(0, -2, 0)]);
    let out = collide(&w, Vec3::new(0.0, -0.4, 0.0), 2, COLLISION_PAD).unwrap();
    assert!(out.vertical_contact);
    assert!((out.position.y - -0.25).abs() < 1e-6);
}

#[test]
fn body_within_pad_is_untouched() {
    let w = world_with(&[(0, -1, 0)]);
    let out = collide(&w, Vec3::new(0.0, 0.1, 0.0), 2, COLLISION_PAD).unwrap();
    assert!(!out.vertical_contact);
    assert_eq!(out.position, Vec3::new(0.0, 0.1, 0.0));
}

#[test]
fn wall_pushes_back_one_axis_and_lets_the_other_slide() {
    let w = world_with(&[(1, 0, 0), (1, -1, 0)]);
    let out = collide(&w, Vec3::new(0.4, 0.0, 0.3), 2, COLLISION_PAD).unwrap();
    assert!((out.position.x - 0.25).abs() < 1e-6);
    assert!((out.position.z - 0.3).abs() < 1e-6);
    assert!(!out.vertical_contact);
}

#[test]
fn ceiling_counts_as_vertical_contact() {
    let w = world_with(&[(0, 1, 0)]);
    let out = collide(&w, Vec3::new(0.0, 0.4, 0.0), 2, COLLISION_PAD).unwrap();
    assert!(out.vertical_contact);
    assert!((out.position.y - 0.25).abs() < 1e-6);
}

#[test]
fn collide_rejects_non_finite_position() {
    let w = world_with(&[]);
    let err = collide(&w, Vec3::new(0.0, f32::NEG_INFINITY, 0.0), 2, COLLISION_PAD);
    assert!(matches!(err, Err(WorldError::DomainError { op: "collide", .. })));
}
