//! Mandelbrot set rendering demo.
//!
//! Scans the classic viewport with the escape-time rule and exports the
//! set as a two-color PNG, then zooms into the elephant valley.
//!
//! Run with: `cargo run --release --example mandelbrot`

use glam::DVec2;
use quadrille_grid::{Scanner, TermProgress};
use quadrille_image::{export_png, Palette};
use quadrille_rules::Mandelbrot;

fn main() {
    env_logger::init();

    println!("Scanning the full set...");

    let grid = Scanner::new(900, 600)
        .with_progress(TermProgress::new())
        .run(&Mandelbrot::default())
        .expect("rule cannot fail");

    let output_path = "mandelbrot.png";
    match export_png(&grid, &Palette::BLACK_ON_WHITE, output_path) {
        Ok(()) => println!("Wrote {}", output_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }

    // Zoom into the elephant valley, east of the main cardioid
    println!("Scanning the elephant valley...");

    let zoom = Mandelbrot::new(DVec2::new(0.25, -0.05), DVec2::new(0.35, 0.05), 2000);
    let grid = Scanner::new(600, 600)
        .run(&zoom)
        .expect("rule cannot fail");

    let zoom_path = "mandelbrot_zoom.png";
    match export_png(&grid, &Palette::WHITE_ON_BLACK, zoom_path) {
        Ok(()) => println!("Wrote {}", zoom_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }
}
