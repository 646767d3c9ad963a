use std::time::Duration;

use blockfire_blocks::BlockTexture;
use blockfire_world::{BlockPos, GeometrySink, MeshOp, World, WorldError};

fn p(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

fn solid_cube(world: &mut World, r: i32) {
    for x in -r..=r {
        for y in -r..=r {
            for z in -r..=r {
                world.add_block(p(x, y, z), BlockTexture::Stone, true).unwrap();
            }
        }
    }
}

#[test]
fn add_shows_exposed_block_immediately() {
    let mut w = World::in_memory();
    assert!(w.add_block(p(0, 0, 0), BlockTexture::Grass, true).unwrap());
    assert!(w.is_shown(p(0, 0, 0)));
    assert_eq!(w.handle_count(), 1);
    assert_eq!(w.queue_len(), 0);
    assert_eq!(w.sink().vertex_count(), 24);
}

#[test]
fn add_into_occupied_cell_is_a_noop() {
    let mut w = World::in_memory();
    w.add_block(p(1, 2, 3), BlockTexture::Sand, true).unwrap();
    let rev = w.sink().revision();
    assert!(!w.add_block(p(1, 2, 3), BlockTexture::Brick, true).unwrap());
    assert_eq!(w.texture_at(p(1, 2, 3)), Some(BlockTexture::Sand));
    assert_eq!(w.sector_members(p(1, 2, 3).sector()).len(), 1);
    assert_eq!(w.sink().revision(), rev);
}

#[test]
fn replace_swaps_texture_and_geometry() {
    let mut w = World::in_memory();
    w.add_block(p(0, 0, 0), BlockTexture::Sand, true).unwrap();
    let prev = w.replace_block(p(0, 0, 0), BlockTexture::Brick, true).unwrap();
    assert_eq!(prev, Some(BlockTexture::Sand));
    assert_eq!(w.texture_at(p(0, 0, 0)), Some(BlockTexture::Brick));
    assert_eq!(w.handle_count(), 1);
    let geom: Vec<_> = w.sink().iter().collect();
    assert_eq!(geom.len(), 1);
    assert_eq!(geom[0].texture, BlockTexture::Brick);
}

#[test]
fn covered_block_is_not_exposed() {
    let mut w = World::in_memory();
    solid_cube(&mut w, 1);
    assert!(!w.exposed(p(0, 0, 0)));
    assert!(w.exposed(p(1, 0, 0)));
    // covering does not hide anything
    assert_eq!(w.shown_len(), 27);
}

#[test]
fn removal_reveals_uncovered_neighbour() {
    let mut w = World::in_memory();
    solid_cube(&mut w, 1);
    w.hide_block(p(0, 0, 0), true).unwrap();
    assert!(!w.is_shown(p(0, 0, 0)));

    let removed = w.remove_block(p(1, 0, 0), true).unwrap();
    assert_eq!(removed, BlockTexture::Stone);
    assert!(!w.contains(p(1, 0, 0)));
    assert!(!w.is_shown(p(1, 0, 0)));
    assert!(w.is_shown(p(0, 0, 0)));
    assert_eq!(w.shown_len(), 26);
    assert_eq!(w.handle_count(), 26);
}

#[test]
fn double_remove_is_a_precondition_violation() {
    let mut w = World::in_memory();
    w.add_block(p(0, 0, 0), BlockTexture::Brick, true).unwrap();
    w.remove_block(p(0, 0, 0), true).unwrap();
    let err = w.remove_block(p(0, 0, 0), true).unwrap_err();
    assert!(matches!(
        err,
        WorldError::PreconditionViolation { op: "remove_block", .. }
    ));
}

#[test]
fn blocks_past_the_world_limit_are_rejected() {
    let mut w = World::in_memory();
    let err = w.add_block(p(i32::MAX, 0, 0), BlockTexture::Brick, true).unwrap_err();
    assert!(matches!(err, WorldError::DomainError { op: "add_block", .. }));
    assert!(!w.contains(p(i32::MAX, 0, 0)));
    assert!(w.add_block(p(0, i32::MIN, 0), BlockTexture::Brick, false).is_err());
    assert!(w.exposed(p(i32::MAX, i32::MIN, 0)));
}

#[test]
fn double_hide_is_a_precondition_violation() {
    let mut w = World::in_memory();
    w.add_block(p(0, 0, 0), BlockTexture::Brick, true).unwrap();
    w.hide_block(p(0, 0, 0), true).unwrap();
    let err = w.hide_block(p(0, 0, 0), true).unwrap_err();
    assert!(matches!(err, WorldError::PreconditionViolation { op: "hide_block", .. }));
}

#[test]
fn queued_show_then_hide_both_execute_in_order() {
    let mut w = World::in_memory();
    w.add_block(p(0, 0, 0), BlockTexture::Grass, false).unwrap();
    w.hide_block(p(0, 0, 0), false).unwrap();
    let ops: Vec<MeshOp> = w.queue().iter().copied().collect();
    assert_eq!(
        ops,
        vec![
            MeshOp::Show { pos: p(0, 0, 0), texture: BlockTexture::Grass },
            MeshOp::Hide { pos: p(0, 0, 0) },
        ]
    );
    assert_eq!(w.process_entire_queue().unwrap(), 2);
    assert_eq!(w.queue_len(), 0);
    assert_eq!(w.handle_count(), 0);
    // one add and one remove reached the sink
    assert_eq!(w.sink().revision(), 2);
}

#[test]
fn zero_budget_executes_nothing() {
    let mut w = World::in_memory();
    for x in 0..10 {
        w.add_block(p(x * 2, 0, 0), BlockTexture::Sand, false).unwrap();
    }
    assert_eq!(w.process_queue(Duration::ZERO).unwrap(), 0);
    assert_eq!(w.queue_len(), 10);
    assert_eq!(w.handle_count(), 0);
    // shown is updated at request time
    assert_eq!(w.shown_len(), 10);
}

#[test]
fn generous_budget_drains_small_queue() {
    let mut w = World::in_memory();
    for x in 0..10 {
        w.add_block(p(x * 2, 0, 0), BlockTexture::Sand, false).unwrap();
    }
    assert_eq!(w.process_queue(Duration::from_secs(5)).unwrap(), 10);
    assert_eq!(w.queue_len(), 0);
    assert_eq!(w.handle_count(), 10);
}

#[test]
fn immediate_hide_waits_behind_queued_show() {
    let mut w = World::in_memory();
    w.add_block(p(0, 0, 0), BlockTexture::Sand, false).unwrap();
    w.remove_block(p(0, 0, 0), true).unwrap();
    assert_eq!(w.queue_len(), 2);
    w.process_entire_queue().unwrap();
    assert_eq!(w.handle_count(), 0);
    assert!(w.sink().is_empty());
}

#[test]
fn empty_sector_buckets_are_dropped() {
    let mut w = World::in_memory();
    w.add_block(p(20, 0, 20), BlockTexture::Sand, true).unwrap();
    let sector = p(20, 0, 20).sector();
    assert_eq!(w.sector_members(sector), &[p(20, 0, 20)]);
    w.remove_block(p(20, 0, 20), true).unwrap();
    assert!(w.sector_members(sector).is_empty());
    assert_eq!(w.sectors().count(), 0);
}

/// Sink that records calls, for checking what reaches the renderer.
#[derive(Default)]
struct Recording {
    next: u64,
    log: Vec<(&'static str, BlockPos)>,
    live: Vec<(blockfire_world::GeometryHandle, BlockPos)>,
}

impl GeometrySink for Recording {
    fn add_geometry(
        &mut self,
        g: blockfire_world::BlockGeometry,
    ) -> blockfire_world::GeometryHandle {
        let h = blockfire_world::GeometryHandle(self.next);
        self.next += 1;
        self.log.push(("add", g.pos));
        self.live.push((h, g.pos));
        h
    }

    fn remove_geometry(&mut self, handle: blockfire_world::GeometryHandle) -> bool {
        let Some(i) = self.live.iter().position(|(h, _)| *h == handle) else {
            return false;
        };
        let (_, pos) = self.live.swap_remove(i);
        self.log.push(("remove", pos));
        true
    }
}

#[test]
fn custom_sink_sees_operations_in_request_order() {
    let mut w = World::new(Recording::default(), Default::default());
    w.add_block(p(0, 0, 0), BlockTexture::Brick, false).unwrap();
    w.add_block(p(5, 0, 0), BlockTexture::Brick, false).unwrap();
    w.remove_block(p(0, 0, 0), false).unwrap();
    w.process_entire_queue().unwrap();
    assert_eq!(
        w.sink().log,
        vec![("add", p(0, 0, 0)), ("add", p(5, 0, 0)), ("remove", p(0, 0, 0))]
    );
}
