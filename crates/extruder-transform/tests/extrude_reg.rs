//! Tile border extrusion regression test
//!
//! Extrudes synthetic tile sheets of several shapes and checks the result
//! against an independent per-pixel description of the layout: every
//! destination pixel in a tile's cell equals the source pixel obtained by
//! clamping its cell-local position into the tile.

use extruder_core::{Pix, PixMut, color};
use extruder_test::{RegParams, solid, tile_sheet};
use extruder_transform::{ExtrusionError, TileGrid, extrude};

/// Compute the expected extruded sheet pixel by pixel.
fn expected_extrusion(src: &Pix, tw: u32, th: u32) -> Pix {
    let columns = src.width() / tw;
    let rows = src.height() / th;
    let width = src.width() + 2 * columns;
    let height = src.height() + 2 * rows;
    let mut pm = PixMut::new(width, height).unwrap();

    for y in 0..height {
        let (row, ly) = (y / (th + 2), y % (th + 2));
        let sy = row * th + ly.saturating_sub(1).min(th - 1);
        for x in 0..width {
            let (col, lx) = (x / (tw + 2), x % (tw + 2));
            let sx = col * tw + lx.saturating_sub(1).min(tw - 1);
            pm.set_pixel(x, y, src.get_pixel(sx, sy).unwrap()).unwrap();
        }
    }
    pm.into()
}

#[test]
fn extrude_reg() {
    let mut rp = RegParams::new("extrude");

    let shapes = [
        // (columns, rows, tile width, tile height)
        (1, 1, 1, 1),
        (2, 2, 1, 1),
        (4, 3, 8, 8),
        (3, 5, 1, 6),
        (5, 2, 7, 1),
        (2, 4, 16, 9),
    ];

    for (columns, rows, tw, th) in shapes {
        let src = tile_sheet(columns, rows, tw, th).expect("build tile sheet");
        let out = extrude(&src, tw, th).expect("extrude");
        eprintln!(
            "  {}x{} tiles of {}x{}: {}x{} -> {}x{}",
            columns,
            rows,
            tw,
            th,
            src.width(),
            src.height(),
            out.width(),
            out.height()
        );

        rp.compare_values((src.width() + 2 * columns) as f64, out.width() as f64, 0.0);
        rp.compare_values((src.height() + 2 * rows) as f64, out.height() as f64, 0.0);
        rp.compare_pix(&expected_extrusion(&src, tw, th), &out);

        // Opaque source leaves no transparent gutter pixel behind
        let transparent = out.data().iter().filter(|&&p| color::alpha(p) == 0).count();
        rp.compare_values(0.0, transparent as f64, 0.0);
    }

    assert!(rp.cleanup(), "extrude regression test failed");
}

#[test]
fn extrude_centers_reg() {
    let mut rp = RegParams::new("extrude_centers");

    let src = tile_sheet(3, 2, 5, 4).unwrap();
    let out = extrude(&src, 5, 4).unwrap();
    let grid = TileGrid::for_image(&src, 5, 4).unwrap();

    for tile in grid.tiles() {
        let mut same = true;
        for y in 0..tile.src.h {
            for x in 0..tile.src.w {
                same &= src.get_pixel(tile.src.x + x, tile.src.y + y)
                    == out.get_pixel(tile.dst.x + x, tile.dst.y + y);
            }
        }
        rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "extrude_centers regression test failed");
}

#[test]
fn extrude_borders_reg() {
    let mut rp = RegParams::new("extrude_borders");

    let (tw, th) = (4, 3);
    let src = tile_sheet(2, 2, tw, th).unwrap();
    let out = extrude(&src, tw, th).unwrap();
    let grid = TileGrid::for_image(&src, tw, th).unwrap();

    for tile in grid.tiles() {
        let (sx, sy, dx, dy) = (tile.src.x, tile.src.y, tile.dst.x, tile.dst.y);

        // Left and right borders replicate the outer columns
        for i in 0..th {
            rp.compare_values(
                src.get_pixel(sx, sy + i).unwrap() as f64,
                out.get_pixel(dx - 1, dy + i).unwrap() as f64,
                0.0,
            );
            rp.compare_values(
                src.get_pixel(sx + tw - 1, sy + i).unwrap() as f64,
                out.get_pixel(dx + tw, dy + i).unwrap() as f64,
                0.0,
            );
        }
        // Top and bottom borders replicate the outer rows
        for i in 0..tw {
            rp.compare_values(
                src.get_pixel(sx + i, sy).unwrap() as f64,
                out.get_pixel(dx + i, dy - 1).unwrap() as f64,
                0.0,
            );
            rp.compare_values(
                src.get_pixel(sx + i, sy + th - 1).unwrap() as f64,
                out.get_pixel(dx + i, dy + th).unwrap() as f64,
                0.0,
            );
        }

        // Each corner holds exactly one copy of the tile's corner pixel;
        // the top-right one in particular must not smear down the column.
        let top_right = src.get_pixel(sx + tw - 1, sy).unwrap();
        rp.compare_values(top_right as f64, out.get_pixel(dx + tw, dy - 1).unwrap() as f64, 0.0);
        let right_second = src.get_pixel(sx + tw - 1, sy + 1).unwrap();
        rp.compare_values(right_second as f64, out.get_pixel(dx + tw, dy + 1).unwrap() as f64, 0.0);
        rp.compare_values(
            src.get_pixel(sx, sy).unwrap() as f64,
            out.get_pixel(dx - 1, dy - 1).unwrap() as f64,
            0.0,
        );
        rp.compare_values(
            src.get_pixel(sx, sy + th - 1).unwrap() as f64,
            out.get_pixel(dx - 1, dy + th).unwrap() as f64,
            0.0,
        );
        rp.compare_values(
            src.get_pixel(sx + tw - 1, sy + th - 1).unwrap() as f64,
            out.get_pixel(dx + tw, dy + th).unwrap() as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "extrude_borders regression test failed");
}

#[test]
fn extrude_preconditions_reg() {
    let mut rp = RegParams::new("extrude_preconditions");

    let src = tile_sheet(1, 1, 10, 9).unwrap();
    let err = extrude(&src, 3, 3).unwrap_err();
    let width_err = matches!(
        err,
        ExtrusionError::NonDivisibleWidth {
            width: 10,
            tile_width: 3
        }
    );
    rp.compare_values(1.0, if width_err { 1.0 } else { 0.0 }, 0.0);

    let err = extrude(&src, 5, 4).unwrap_err();
    let height_err = matches!(err, ExtrusionError::NonDivisibleHeight { .. });
    rp.compare_values(1.0, if height_err { 1.0 } else { 0.0 }, 0.0);

    let err = extrude(&src, 0, 0).unwrap_err();
    let dim_err = matches!(err, ExtrusionError::InvalidTileDimension { .. });
    rp.compare_values(1.0, if dim_err { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "extrude_preconditions regression test failed");
}

#[test]
fn extrude_determinism_reg() {
    let mut rp = RegParams::new("extrude_determinism");

    let src = tile_sheet(4, 4, 3, 3).unwrap();
    let out1 = extrude(&src, 3, 3).unwrap();
    let out2 = extrude(&src, 3, 3).unwrap();
    rp.compare_pix(&out1, &out2);
    let same_bytes = out1.to_rgba_bytes() == out2.to_rgba_bytes();
    rp.compare_values(1.0, if same_bytes { 1.0 } else { 0.0 }, 0.0);

    // Extruding twice is not a no-op: the gutters change the layout
    // (12 + 2*4 = 20 is not a multiple of 3, so it is even rejected)
    let again = extrude(&out1, 3, 3);
    rp.compare_values(1.0, if again.is_err() { 1.0 } else { 0.0 }, 0.0);

    let src = tile_sheet(2, 1, 2, 2).unwrap();
    let once = extrude(&src, 2, 2).unwrap();
    let twice = extrude(&once, 2, 2).unwrap();
    rp.compare_values(0.0, if once.sizes_equal(&twice) { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "extrude_determinism regression test failed");
}

#[test]
fn extrude_solid_reg() {
    let mut rp = RegParams::new("extrude_solid");

    // A uniform sheet stays uniform: gutters carry the same color
    let pixel = color::compose_rgba(12, 34, 56, 200);
    let src = solid(6, 4, pixel).unwrap();
    let out = extrude(&src, 3, 2).unwrap();
    rp.compare_pix(&solid(10, 8, pixel).unwrap(), &out);

    // 1x1 tiles on a 2x2 sheet: every pixel becomes a uniform 3x3 block
    let src = tile_sheet(2, 2, 1, 1).unwrap();
    let out = extrude(&src, 1, 1).unwrap();
    rp.compare_values(6.0, out.width() as f64, 0.0);
    rp.compare_values(6.0, out.height() as f64, 0.0);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let block = solid(3, 3, src.get_pixel(x, y).unwrap()).unwrap();
        let mut cell = PixMut::new(3, 3).unwrap();
        cell.rasterop(extruder_core::Box::new_unchecked(0, 0, 3, 3), &out, x * 3, y * 3)
            .unwrap();
        rp.compare_pix(&block, &cell.into());
    }

    assert!(rp.cleanup(), "extrude_solid regression test failed");
}
