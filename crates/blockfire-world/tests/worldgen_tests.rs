use blockfire_blocks::BlockTexture;
use blockfire_world::{BlockPos, World, WorldGenConfig, cube_vertices, generate};
use blockfire_geom::Vec3;

fn small() -> WorldGenConfig {
    WorldGenConfig {
        half_size: 4,
        ..WorldGenConfig::default()
    }
}

#[test]
fn floor_and_walls_are_laid_out() {
    let mut w = World::in_memory();
    let placed = generate(&mut w, &small()).unwrap();
    // 9x9 floor of two layers plus 32 border columns of four wall blocks
    assert_eq!(placed, 81 * 2 + 32 * 4);
    assert_eq!(w.len(), placed);
    assert_eq!(w.texture_at(BlockPos::new(0, -2, 0)), Some(BlockTexture::Grass));
    assert_eq!(w.texture_at(BlockPos::new(0, -3, 0)), Some(BlockTexture::Stone));
    assert_eq!(w.texture_at(BlockPos::new(4, -2, 0)), Some(BlockTexture::Stone));
    assert_eq!(w.texture_at(BlockPos::new(-4, 2, 3)), Some(BlockTexture::Stone));
    assert_eq!(w.texture_at(BlockPos::new(0, -1, 0)), None);
    assert_eq!(w.texture_at(BlockPos::new(4, 3, 0)), None);
}

#[test]
fn generation_only_queues_geometry() {
    let mut w = World::in_memory();
    generate(&mut w, &small()).unwrap();
    assert_eq!(w.handle_count(), 0);
    assert!(w.queue_len() > 0);
    assert_eq!(w.queue_len(), w.shown_len());
    w.process_entire_queue().unwrap();
    assert_eq!(w.handle_count(), w.shown_len());
}

#[test]
fn config_reads_partial_toml() {
    let cfg = WorldGenConfig::from_toml_str("half_size = 12\nwall_top = 5\n").unwrap();
    assert_eq!(cfg.half_size, 12);
    assert_eq!(cfg.wall_top, 5);
    assert_eq!(cfg.base_y, 0);
    assert_eq!(cfg.sector_pad, 4);
}

#[test]
fn cube_vertices_span_the_unit_cell() {
    let v = cube_vertices(Vec3::new(1.0, 2.0, 3.0), 0.5);
    // first top corner
    assert_eq!(&v[0..3], &[0.5, 2.5, 2.5]);
    for c in v.chunks(3) {
        assert!((c[0] - 1.0).abs() == 0.5);
        assert!((c[1] - 2.0).abs() == 0.5);
        assert!((c[2] - 3.0).abs() == 0.5);
    }
}
