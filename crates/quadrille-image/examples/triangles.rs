//! Self-referential rule demo.
//!
//! Grows a Sierpinski triangle from a single seeded cell with the
//! corner-parity rule, then runs the mirror-symmetry rule over a random
//! seed row.
//!
//! Run with: `cargo run --release --example triangles`

use quadrille_grid::{Scanner, SeedRow};
use quadrille_image::{export_png, Palette};
use quadrille_rules::{CornerParity, MirrorSymmetric};

fn main() {
    env_logger::init();

    println!("Growing a Sierpinski triangle...");

    // One painted cell in the middle of the seed row
    let width = 513;
    let mut seed = vec![false; width];
    seed[width / 2] = true;

    let grid = Scanner::new(width, 257)
        .with_seed_row(SeedRow::Custom(seed))
        .run(&CornerParity)
        .expect("seed matches the width");

    let triangle_path = "sierpinski.png";
    match export_png(&grid, &Palette::BLACK_ON_WHITE, triangle_path) {
        Ok(()) => println!("Wrote {}", triangle_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }

    // Mirror symmetry over random noise settles into banded structure
    println!("Scanning mirror symmetry over a random seed row...");

    let grid = Scanner::new(512, 512)
        .with_seed_row(SeedRow::Random { seed: Some(2718) })
        .run(&MirrorSymmetric::new(2))
        .expect("seed row cannot mismatch");

    let mirror_path = "mirror.png";
    match export_png(&grid, &Palette::WHITE_ON_BLACK, mirror_path) {
        Ok(()) => println!("Wrote {}", mirror_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }
}
