//! Shared fixtures for image-based unit tests.
//!
//! Module grids are version 1 QR symbols, one string per row, `#` for a dark
//! module.

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use std::io::Cursor;

/// Byte mode, EC level L: `PRODAPP: 42\nEXTRA`
pub(crate) const PRODAPP_42_EXTRA: [&str; 21] = [
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

/// Numeric mode, EC level M: `4376471154038`
pub(crate) const NUMERIC_FOREIGN: [&str; 21] = [
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

/// Render a module grid with a 4-module quiet zone
pub(crate) fn render_grid(rows: &[&str], module_px: u32) -> GrayImage {
    let modules = rows.len() as u32;
    let quiet = 4;
    let side = (modules + 2 * quiet) * module_px;
    GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / module_px) as i64 - quiet as i64;
        let my = (y / module_px) as i64 - quiet as i64;
        let dark = mx >= 0
            && my >= 0
            && (my as usize) < rows.len()
            && rows[my as usize].as_bytes().get(mx as usize) == Some(&b'#');
        Luma([if dark { 0 } else { 255 }])
    })
}

/// Encode a grayscale image as PNG bytes
pub(crate) fn png_bytes(image: GrayImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut out, ImageOutputFormat::Png)
        .expect("encode png");
    out.into_inner()
}
