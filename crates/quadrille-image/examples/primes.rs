//! Number-theory pattern demo.
//!
//! Renders the primes as a dot pattern, then the cells whose scan index
//! is coprime to the product of its coordinates.
//!
//! Run with: `cargo run --release --example primes`

use quadrille_grid::Scanner;
use quadrille_image::{export_png, Palette};
use quadrille_rules::{CoprimeIndex, PrimeIndex};

fn main() {
    env_logger::init();

    println!("Scanning primes...");

    let grid = Scanner::new(512, 512)
        .run(&PrimeIndex)
        .expect("rule cannot fail");
    println!(
        "{} of {} cells have a prime index",
        grid.population(),
        512 * 512
    );

    let primes_path = "primes.png";
    match export_png(&grid, &Palette::BLACK_ON_WHITE, primes_path) {
        Ok(()) => println!("Wrote {}", primes_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }

    // Coprimality against x * y gives hyperbola-like streaks
    println!("Scanning coprime cells...");

    let grid = Scanner::new(512, 512)
        .run(&CoprimeIndex)
        .expect("rule cannot fail");

    let coprime_path = "coprime.png";
    match export_png(&grid, &Palette::WHITE_ON_BLACK, coprime_path) {
        Ok(()) => println!("Wrote {}", coprime_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }
}
