#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Write a `width` x `height` PNG filled with `rgb`.
pub fn write_uniform_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .unwrap();
    path
}

/// Write a PNG whose left and right `band` columns are colored and whose
/// remaining centre is `center`.
pub fn write_banded_png(dir: &Path, name: &str, height: u32, band: u32, center: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    let width = height + 2 * band;
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < band {
            Rgb([255, 0, 0])
        } else if x >= band + height {
            Rgb([0, 0, 255])
        } else {
            Rgb(center)
        }
    });
    img.save(&path).unwrap();
    path
}
