//! Procedural 16x16 pixel art sprites for the cell kinds.
//!
//! Each sprite is a 16x16 grid of palette indices (0 = transparent). The
//! textures are built once at startup; the renderer looks them up by cell
//! kind through an explicit match, so there is no positional list whose
//! indices could drift out of step with the enum.

use macroquad::prelude::*;

use crate::domain::CellKind;

/// Palette lookup: index 0 is transparent.
fn palette_color(idx: u8) -> Color {
    match idx {
        0 => Color::new(0.0, 0.0, 0.0, 0.0),
        1 => Color::from_rgba(25, 30, 35, 255),    // outline
        2 => Color::from_rgba(0, 190, 130, 255),   // filler body
        3 => Color::from_rgba(255, 150, 40, 255),  // arrow body
        _ => WHITE,
    }
}

/// Build a sprite texture from a 16x16 palette-indexed grid.
fn build_sprite(data: &[u8; 256]) -> Texture2D {
    let mut pixels = [0u8; 16 * 16 * 4];
    for (i, &idx) in data.iter().enumerate() {
        let color = palette_color(idx);
        let p = i * 4;
        pixels[p] = (color.r * 255.0) as u8;
        pixels[p + 1] = (color.g * 255.0) as u8;
        pixels[p + 2] = (color.b * 255.0) as u8;
        pixels[p + 3] = (color.a * 255.0) as u8;
    }
    let texture = Texture2D::from_rgba8(16, 16, &pixels);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Filler: a bordered solid block.
#[rustfmt::skip]
const FILLER_DATA: [u8; 256] = [
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,1,
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,
];

/// Arrow: points up; the renderer rotates it for the other facings.
#[rustfmt::skip]
const ARROW_DATA: [u8; 256] = [
    0,0,0,0,0,0,0,3,3,0,0,0,0,0,0,0,
    0,0,0,0,0,0,3,3,3,3,0,0,0,0,0,0,
    0,0,0,0,0,3,3,3,3,3,3,0,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,3,3,3,3,3,3,3,3,3,3,0,0,0,
    0,0,3,3,3,3,3,3,3,3,3,3,3,3,0,0,
    0,3,3,3,3,3,3,3,3,3,3,3,3,3,3,0,
    0,1,1,1,3,3,3,3,3,3,3,3,1,1,1,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,3,3,3,3,3,3,3,3,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
];

/// The built cell sprites, looked up by kind.
pub struct SpriteSet {
    filler: Texture2D,
    arrow: Texture2D,
}

/// Build all sprite textures. Call once at startup.
pub fn build_sprites() -> SpriteSet {
    SpriteSet {
        filler: build_sprite(&FILLER_DATA),
        arrow: build_sprite(&ARROW_DATA),
    }
}

impl SpriteSet {
    /// Texture for a cell kind. Empty cells have no sprite and are skipped
    /// by the renderer.
    pub fn for_kind(&self, kind: CellKind) -> Option<&Texture2D> {
        match kind {
            CellKind::Empty => None,
            CellKind::Filler => Some(&self.filler),
            CellKind::Arrow => Some(&self.arrow),
        }
    }
}
