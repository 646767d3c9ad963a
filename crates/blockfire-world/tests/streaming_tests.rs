use std::collections::BTreeSet;

use blockfire_blocks::BlockTexture;
use blockfire_world::{BlockPos, SectorCoord, World};

/// One isolated block near the corner of every sector in a 13x13 area.
fn scattered_world() -> World {
    let mut w = World::in_memory();
    for sx in -6..=6 {
        for sz in -6..=6 {
            w.add_block(BlockPos::new(sx * 16 + 3, 0, sz * 16 + 5), BlockTexture::Brick, false)
                .unwrap();
        }
    }
    w.process_entire_queue().unwrap();
    w
}

/// `scattered_world` with only the streaming window around `center` visible.
fn streamed_world(center: SectorCoord) -> World {
    let mut w = scattered_world();
    for sx in -6..=6 {
        for sz in -6..=6 {
            w.hide_sector(SectorCoord::new(sx, sz)).unwrap();
        }
    }
    w.change_sectors(None, Some(center)).unwrap();
    w.process_entire_queue().unwrap();
    w
}

fn shown(w: &World) -> BTreeSet<BlockPos> {
    w.shown_positions().collect()
}

fn handles(w: &World) -> BTreeSet<BlockPos> {
    w.handle_positions().collect()
}

#[test]
fn leaving_a_window_hides_everything_in_it() {
    let mut w = scattered_world();
    assert_eq!(w.shown_len(), 169);
    let a = SectorCoord::new(0, 0);
    w.change_sectors(Some(a), None).unwrap();
    w.process_entire_queue().unwrap();
    assert_eq!(w.shown_len(), 169 - 77);
    assert!(shown(&w).iter().all(|p| !a.window(4).contains(&p.sector())));
}

#[test]
fn entering_a_window_shows_only_its_sectors() {
    let a = SectorCoord::new(0, 0);
    let w = streamed_world(a);
    let window = a.window(4);
    let s = shown(&w);
    assert_eq!(s.len(), window.len());
    assert!(s.iter().all(|p| window.contains(&p.sector())));
    assert_eq!(s, handles(&w));
}

#[test]
fn round_trip_restores_shown_set() {
    let a = SectorCoord::new(0, 0);
    let b = SectorCoord::new(3, -2);
    let mut w = streamed_world(a);
    let before = shown(&w);

    w.change_sectors(Some(a), Some(b)).unwrap();
    w.process_entire_queue().unwrap();
    let moved = shown(&w);
    assert_ne!(moved, before);
    assert!(moved.iter().any(|p| p.sector() == SectorCoord::new(6, -6)));

    w.change_sectors(Some(b), Some(a)).unwrap();
    w.process_entire_queue().unwrap();
    assert_eq!(shown(&w), before);
    assert_eq!(handles(&w), before);
}

#[test]
fn same_sector_change_is_a_noop() {
    let mut w = scattered_world();
    let a = SectorCoord::new(1, 1);
    w.change_sectors(Some(a), Some(a)).unwrap();
    assert_eq!(w.queue_len(), 0);
}

#[test]
fn covered_blocks_stay_hidden_when_streaming_in() {
    let mut w = World::in_memory();
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                w.add_block(BlockPos::new(x, y, z), BlockTexture::Stone, false).unwrap();
            }
        }
    }
    let a = SectorCoord::new(0, 0);
    w.change_sectors(Some(a), None).unwrap();
    w.process_entire_queue().unwrap();
    assert_eq!(w.shown_len(), 0);

    w.change_sectors(None, Some(a)).unwrap();
    w.process_entire_queue().unwrap();
    assert_eq!(w.shown_len(), 26);
    assert!(!w.is_shown(BlockPos::new(0, 0, 0)));
}
