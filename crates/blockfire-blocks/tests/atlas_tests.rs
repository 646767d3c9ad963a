use blockfire_blocks::{AtlasError, BlockAtlas, BlockTexture, Tile, tex_coord};
use proptest::prelude::*;

#[test]
fn tex_coord_spans_one_tile() {
    let uv = tex_coord(Tile::new(1, 0), 4);
    assert_eq!(uv, [0.25, 0.0, 0.5, 0.0, 0.5, 0.25, 0.25, 0.25]);
}

#[test]
fn grass_has_distinct_top_bottom_and_shared_sides() {
    let atlas = BlockAtlas::default();
    let uvs = atlas.uvs(BlockTexture::Grass);
    assert_eq!(&uvs[0..8], &tex_coord(Tile::new(1, 0), 4));
    assert_eq!(&uvs[8..16], &tex_coord(Tile::new(0, 1), 4));
    let side = tex_coord(Tile::new(0, 0), 4);
    for face in 0..4 {
        let start = 16 + face * 8;
        assert_eq!(&uvs[start..start + 8], &side);
    }
}

#[test]
fn empty_config_matches_builtin() {
    let parsed = BlockAtlas::from_toml_str("").unwrap();
    let builtin = BlockAtlas::default();
    for t in BlockTexture::ALL {
        assert_eq!(parsed.uvs(t), builtin.uvs(t), "{t}");
    }
}

#[test]
fn override_replaces_one_texture() {
    let atlas = BlockAtlas::from_toml_str(
        r#"
[atlas]
grid = 8
texture = "sheet.png"

[tiles.brick]
top = [7, 7]
bottom = [7, 7]
side = [6, 7]
"#,
    )
    .unwrap();
    assert_eq!(atlas.grid(), 8);
    assert_eq!(atlas.texture_file(), "sheet.png");
    assert_eq!(atlas.layout(BlockTexture::Brick).side, Tile::new(6, 7));
    assert_eq!(&atlas.uvs(BlockTexture::Brick)[0..2], &[0.875, 0.875]);
    // untouched textures keep the built-in tiles
    assert_eq!(atlas.layout(BlockTexture::Stone).top, Tile::new(2, 1));
}

#[test]
fn out_of_range_tile_is_rejected() {
    let err = BlockAtlas::from_toml_str(
        r#"
[tiles.sand]
top = [4, 0]
bottom = [0, 0]
side = [0, 0]
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AtlasError::TileOutOfRange { texture: BlockTexture::Sand, col: 4, .. }
    ));
}

#[test]
fn zero_grid_is_rejected() {
    let err = BlockAtlas::from_toml_str("[atlas]\ngrid = 0\n").unwrap_err();
    assert!(matches!(err, AtlasError::EmptyGrid));
}

#[test]
fn texture_names_parse_case_insensitively() {
    assert_eq!("Brick".parse::<BlockTexture>().unwrap(), BlockTexture::Brick);
    assert_eq!(" stone ".parse::<BlockTexture>().unwrap(), BlockTexture::Stone);
    assert!("obsidian".parse::<BlockTexture>().is_err());
    assert!(!BlockTexture::Stone.breakable());
    assert!(BlockTexture::Grass.breakable());
}

#[test]
fn shipped_atlas_matches_builtin_layout() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/atlas.toml");
    let atlas = BlockAtlas::from_path(path).unwrap();
    let builtin = BlockAtlas::default();
    for tex in BlockTexture::ALL {
        assert_eq!(atlas.uvs(tex), builtin.uvs(tex), "{}", tex);
    }
    assert_eq!(atlas.texture_file(), "texture.png");
}

proptest! {
    #[test]
    fn uvs_stay_inside_unit_square(col in 0u32..16, row in 0u32..16, extra in 0u32..8) {
        let n = col.max(row) + 1 + extra;
        let uv = tex_coord(Tile::new(col, row), n);
        for c in uv {
            prop_assert!((0.0..=1.0 + 1e-6).contains(&c));
        }
        prop_assert!(uv[2] > uv[0]);
        prop_assert!(uv[5] > uv[3]);
    }
}
