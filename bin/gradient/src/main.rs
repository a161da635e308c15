//! Renders a sheet of color strips to `out.png`: a gradient, a hue rotated
//! palette and a random palette. When given an image path, also prints the
//! dominant colors and the brightness hash of that image.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{info, warn};
use swatch::{
    classify, contrast_text_color, dominant_colors, generate_palette, image_hash, interpolate,
    random_palette, Hex, Rgb, HASH_SIDE,
};

const WIDTH: u32 = 1000;
const HEIGHT_PER_STRIP: u32 = 100;

fn main() {
    env_logger::init();

    let left = Rgb::new(255, 0, 0);
    let right = Rgb::new(0, 0, 255);

    let strips: Vec<Vec<Hex>> = vec![
        interpolate(left, right, 20).unwrap_or_default(),
        generate_palette(left, 12),
        random_palette(8),
    ];

    let height = strips.len() as u32 * HEIGHT_PER_STRIP;
    let mut img = RgbaImage::new(WIDTH, height);

    img.enumerate_rows_mut().for_each(|(_, pixels)| {
        for (x, y, pixel) in pixels {
            let strip = &strips[(y / HEIGHT_PER_STRIP) as usize];
            if strip.is_empty() {
                continue;
            }
            let index = (x as usize * strip.len()) / WIDTH as usize;
            let Rgb { red, green, blue } = strip[index].to_rgb();
            *pixel = Rgba([red, green, blue, 255]);
        }
    });

    match img.save("out.png") {
        Ok(()) => info!("wrote {} strips to out.png", strips.len()),
        Err(err) => warn!("could not write out.png: {err}"),
    }

    if let Some(path) = std::env::args().nth(1) {
        print_dominant_colors(&path);
    }
}

fn print_dominant_colors(path: &str) {
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(err) => {
            warn!("could not open {path}: {err}");
            return;
        }
    };

    match dominant_colors(img.as_raw(), 5) {
        Ok(colors) => {
            for hex in colors {
                println!(
                    "{hex}  {:<6}  text {}",
                    classify(hex.clone()).to_string(),
                    contrast_text_color(hex.clone())
                );
            }
        }
        Err(err) => warn!("could not sample {path}: {err}"),
    }

    let thumbnail = imageops::resize(&img, HASH_SIDE, HASH_SIDE, FilterType::Triangle);
    match image_hash(thumbnail.as_raw()) {
        Ok(hash) => println!("hash {hash}"),
        Err(err) => warn!("could not hash {path}: {err}"),
    }
}
