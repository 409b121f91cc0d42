//! Fixtures shared by the integration tests
//!
//! Module grids are version 1 QR symbols, one string per row, `#` for a dark
//! module.

#![allow(dead_code)]

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use prod_scan::ProductRecord;
use std::io::Cursor;
use std::path::Path;

/// Byte mode, EC level L: `PRODAPP: 42\nEXTRA`
pub const PRODAPP_42_EXTRA: [&str; 21] = [
    "#######..#.##.#######",
    "#.....#.#####.#.....#",
    "#.###.#.....#.#.###.#",
    "#.###.#.##.##.#.###.#",
    "#.###.#..#.##.#.###.#",
    "#.....#.#..##.#.....#",
    "#######.#.#.#.#######",
    ".........#..#........",
    "#####.####...#.#.#.#.",
    "##.##..######.#.#.##.",
    "##.##.####.##.##...#.",
    "##.#.#.#.####..#.##..",
    ".##...##...##.##..#..",
    "........#...#....#.#.",
    "#######.#..##....#.#.",
    "#.....#..##....#.###.",
    "#.###.#.###..###..#..",
    "#.###.#.###.##...###.",
    "#.###.#.###.#.....#..",
    "#.....#.#.#......##..",
    "#######.###.####..##.",
];

/// Byte mode, EC level L: `PRODAPP: 7`
pub const PRODAPP_7: [&str; 21] = [
    "#######..#..#.#######",
    "#.....#.#..#..#.....#",
    "#.###.#..#....#.###.#",
    "#.###.#.#..#..#.###.#",
    "#.###.#...###.#.###.#",
    "#.....#.###.#.#.....#",
    "#######.#.#.#.#######",
    "..........###........",
    "#####.####..##.#.#.#.",
    "#####.....#.#.#.#.##.",
    "##....#....#..##...#.",
    "#..##...#.#....#.##..",
    "#.#####.#..#..##..#..",
    "........##.##....#.#.",
    "#######.#...#....#.#.",
    "#.....#...###..#.##.#",
    "#.###.#.#.#.####..#.#",
    "#.###.#.#...##...##..",
    "#.###.#.####.##...#..",
    "#.....#.###......##..",
    "#######.#.##...#..##.",
];

/// Numeric mode: `4376471154038`
pub const NUMERIC_FOREIGN: [&str; 21] = [
    "#######.....#.#######",
    "#.....#..#....#.....#",
    "#.###.#...##..#.###.#",
    "#.###.#...#...#.###.#",
    "#.###.#..####.#.###.#",
    "#.....#.#.#...#.....#",
    "#######.#.#.#.#######",
    ".........#...........",
    "#..#.##.######.#.....",
    "###.#..##..#.#.#.##..",
    "#..#.####.##..###...#",
    "..#.#..#....#####....",
    "..#...##.#.#.###.##..",
    "........#.#..####.##.",
    "#######...###.#.####.",
    "#.....#.#.....##....#",
    "#.###.#..##.###..#.##",
    "#.###.#.#.#..####..##",
    "#.###.#..###.###.#..#",
    "#.....#..####..##..#.",
    "#######.###..#.###...",
];

/// Registry row for product 42
pub fn widget() -> ProductRecord {
    ProductRecord::new(42, "Widget", "0123456789", "2026-01-01", "AUTHORIZED")
}

/// Render a module grid with a 4-module quiet zone
pub fn render_grid(rows: &[&str], module_px: u32) -> GrayImage {
    let quiet = 4;
    let side = (rows.len() as u32 + 2 * quiet) * module_px;
    GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / module_px) as i64 - quiet as i64;
        let my = (y / module_px) as i64 - quiet as i64;
        let dark = mx >= 0
            && my >= 0
            && rows
                .get(my as usize)
                .and_then(|row| row.as_bytes().get(mx as usize))
                == Some(&b'#');
        Luma([if dark { 0 } else { 255 }])
    })
}

/// Blank light image with no symbol
pub fn blank(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([230]))
}

/// Encode a grayscale image as PNG bytes
pub fn png_bytes(image: GrayImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut out, ImageOutputFormat::Png)
        .expect("encode png");
    out.into_inner()
}

/// Write a grayscale image as a PNG file
pub fn save_png(image: &GrayImage, path: &Path) {
    image.save(path).expect("write png");
}
