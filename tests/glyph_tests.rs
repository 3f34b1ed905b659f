// Host-side tests for glyph raster sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod glyphs {
        include!("../src/core/glyphs.rs");
    }
}

use crate::core::glyphs::*;
use glam::Vec2;

/// Transparent raster with an opaque axis-aligned block.
fn block_raster(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> AlphaRaster {
    let mut rgba = vec![0u8; w * h * 4];
    for y in y0..y1 {
        for x in x0..x1 {
            let i = (y * w + x) * 4;
            rgba[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    }
    AlphaRaster::new(w, h, rgba).unwrap()
}

#[test]
fn raster_rejects_short_buffers() {
    assert!(AlphaRaster::new(4, 4, vec![0; 63]).is_none());
    assert!(AlphaRaster::new(0, 4, vec![]).is_none());
    assert!(AlphaRaster::new(4, 4, vec![0; 64]).is_some());
}

#[test]
fn samples_every_fourth_pixel_inside_shape() {
    let raster = block_raster(64, 32, 16, 8, 32, 24);
    let targets = sample_targets(&raster, &GlyphSampling::default());
    // x in {16,20,24,28}, y in {8,12,16,20}
    assert_eq!(targets.len(), 16);
    let (lo, hi) = bounds(&targets).unwrap();
    assert_eq!(lo, Vec2::new(16.0 - 32.0, 8.0 - 16.0));
    assert_eq!(hi, Vec2::new(28.0 - 32.0, 20.0 - 16.0));
}

#[test]
fn alpha_threshold_is_exclusive() {
    let mut rgba = vec![0u8; 8 * 8 * 4];
    rgba[3] = 128; // (0,0)
    rgba[(4 * 4) + 3] = 129; // (4,0)
    let raster = AlphaRaster::new(8, 8, rgba).unwrap();
    let targets = sample_targets(&raster, &GlyphSampling::default());
    assert_eq!(targets, vec![Vec2::new(0.0, -4.0)]);
}

#[test]
fn sampling_is_deterministic() {
    let raster = block_raster(120, 40, 10, 5, 97, 33);
    let sampling = GlyphSampling::default();
    let a = sample_targets(&raster, &sampling);
    let b = sample_targets(&raster, &sampling);
    assert_eq!(a, b);
}

#[test]
fn centered_shape_has_symmetric_bounds() {
    let raster = block_raster(80, 80, 20, 20, 61, 61);
    let targets = sample_targets(&raster, &GlyphSampling::default());
    let (lo, hi) = bounds(&targets).unwrap();
    assert_eq!(lo, -hi);
}

#[test]
fn fit_scale_shrinks_targets_into_canvas() {
    let sampling = GlyphSampling::fit(Vec2::new(2000.0, 400.0), Vec2::new(1200.0, 500.0), 0.8);
    assert!((sampling.scale - 0.48).abs() < 1e-6);
    assert_eq!(sampling.step, 4);

    let raster = block_raster(200, 40, 0, 0, 200, 40);
    let unit = sample_targets(&raster, &GlyphSampling::default());
    let scaled = sample_targets(&raster, &sampling);
    assert_eq!(unit.len(), scaled.len());
    for (u, s) in unit.iter().zip(&scaled) {
        assert!((*u * 0.48 - *s).length() < 1e-4);
    }
}

#[test]
fn empty_raster_yields_no_targets() {
    let raster = block_raster(16, 16, 0, 0, 0, 0);
    assert!(sample_targets(&raster, &GlyphSampling::default()).is_empty());
    assert!(bounds(&[]).is_none());
}
