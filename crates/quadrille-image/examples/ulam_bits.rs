//! Ulam sequence pattern demo.
//!
//! Renders the Ulam sequence two ways: each term as a row of binary
//! digits, and as membership dots over the scan index.
//!
//! Run with: `cargo run --release --example ulam_bits`

use quadrille_grid::{Extra, Extras, Scanner};
use quadrille_image::{export_png, Palette};
use quadrille_rules::{SequenceBits, SequenceMember};
use quadrille_ulam::ulam_numbers;

fn main() {
    env_logger::init();

    println!("Generating Ulam terms...");

    let height = 400;
    let terms = ulam_numbers(1, 2, height).expect("valid seeds and length");
    println!("Largest of {} terms: {}", height, terms[height - 1]);

    // Row y spells out term y in binary, least significant bit at the left
    let grid = Scanner::new(16, height)
        .with_extras(Extras::new().with(Extra::IntSeq(terms)))
        .run(&SequenceBits::new(0))
        .expect("extras slot 0 is a sequence");

    let bits_path = "ulam_bits.png";
    match export_png(&grid, &Palette::BLACK_ON_WHITE, bits_path) {
        Ok(()) => println!("Wrote {}", bits_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }

    // Membership view: paint the cells whose scan index is an Ulam number
    println!("Scanning Ulam membership...");

    let terms = ulam_numbers(1, 2, 1400).expect("valid seeds and length");
    let grid = Scanner::new(128, 128)
        .with_extras(Extras::new().with(Extra::IntSeq(terms)))
        .run(&SequenceMember::new(0))
        .expect("extras slot 0 is a sequence");
    println!("{} of {} cells are Ulam numbers", grid.population(), 128 * 128);

    let members_path = "ulam_members.png";
    match export_png(&grid, &Palette::WHITE_ON_BLACK, members_path) {
        Ok(()) => println!("Wrote {}", members_path),
        Err(e) => eprintln!("Failed to write PNG: {}", e),
    }
}
