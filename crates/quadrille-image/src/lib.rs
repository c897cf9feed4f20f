//! Two-color rasterization and export for quadrille pattern grids.
//!
//! Turns a finished `Grid` into an `image::RgbImage` through a two-entry
//! [`Palette`], one pixel per cell, and writes lossless PNG or BMP files.
//!
//! # Example
//!
//! ```no_run
//! use quadrille_grid::Grid;
//! use quadrille_image::{export_png, Palette};
//!
//! let grid = Grid::from_cells(2, 2, vec![true, false, false, true]).expect("2 x 2 cells");
//! export_png(&grid, &Palette::BLACK_ON_WHITE, "checker.png").expect("write image");
//! ```

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use thiserror::Error;

use quadrille_grid::Grid;

/// The two colors a grid renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// RGB for painted cells.
    pub painted: [u8; 3],
    /// RGB for unpainted cells.
    pub background: [u8; 3],
}

impl Palette {
    /// Black marks on a white page.
    pub const BLACK_ON_WHITE: Palette = Palette::new([0, 0, 0], [255, 255, 255]);
    /// White marks on a black page.
    pub const WHITE_ON_BLACK: Palette = Palette::new([255, 255, 255], [0, 0, 0]);

    /// Creates a palette from painted and background colors.
    pub const fn new(painted: [u8; 3], background: [u8; 3]) -> Self {
        Self {
            painted,
            background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::BLACK_ON_WHITE
    }
}

/// Errors that can occur when exporting a grid image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The grid has a zero dimension, so there is nothing to render.
    #[error("cannot export an empty {width}x{height} image")]
    EmptyImage {
        /// Grid width in cells.
        width: usize,
        /// Grid height in cells.
        height: usize,
    },

    /// The encoder or the filesystem failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders a grid into an RGB image, one pixel per cell.
///
/// Pixel `(x, y)` is exactly `palette.painted` where the cell is painted
/// and exactly `palette.background` where it is not.
pub fn to_image(grid: &Grid, palette: &Palette) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let painted = grid.get(x as usize, y as usize);
        *pixel = Rgb(if painted {
            palette.painted
        } else {
            palette.background
        });
    }
    img
}

/// Writes a grid as a PNG file.
///
/// Fails with `ExportError::EmptyImage` when the grid has no cells.
pub fn export_png(
    grid: &Grid,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    export(grid, palette, path.as_ref(), ImageFormat::Png)
}

/// Writes a grid as a BMP file.
///
/// Fails with `ExportError::EmptyImage` when the grid has no cells.
pub fn export_bmp(
    grid: &Grid,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    export(grid, palette, path.as_ref(), ImageFormat::Bmp)
}

/// The format is forced explicitly rather than guessed from the extension.
fn export(
    grid: &Grid,
    palette: &Palette,
    path: &Path,
    format: ImageFormat,
) -> Result<(), ExportError> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(ExportError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    debug!(
        "exporting {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    let img = to_image(grid, palette);
    img.save_with_format(path, format)?;
    Ok(())
}
