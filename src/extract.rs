//! Image loading and k-means palette extraction.
//!
//! The extractor flattens an RGB buffer into points, clusters them with
//! [`kmeans_colors::get_kmeans`] using a fixed seed, rounds the centroids to
//! 8-bit channels and orders them from darkest to lightest by HSV value.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use image::{RgbImage, imageops::FilterType};
use kmeans_colors::get_kmeans;
use palette::Srgb;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::convert::{Color, HsvColor, parse_color, rgb_to_hex, rgb_to_hex_code, rgb_to_hsv};
use crate::error::{PaletteError, Result};
use crate::psychology::{Psychology, describe};

/// Largest supported cluster count; the clustering crate labels pixels with `u8`.
pub const MAX_COLORS: usize = 255;

// ------------------------------------------------------------
// Image sources
// ------------------------------------------------------------

/// Where an image comes from.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl ImageSource<'_> {
    /// Decode the source into an RGB buffer.
    pub fn load(&self) -> Result<RgbImage> {
        match *self {
            ImageSource::Path(path) => load_image(path),
            ImageSource::Bytes(bytes) => load_image_from_memory(bytes),
        }
    }
}

/// Open and decode an image file, dropping any alpha channel.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| {
        PaletteError::image_load(format!("cannot open {}", path.display()), e)
    })?;
    Ok(img.to_rgb8())
}

/// Decode an in-memory image, dropping any alpha channel.
pub fn load_image_from_memory(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PaletteError::image_load("unable to decode image", e))?;
    Ok(img.to_rgb8())
}

// ------------------------------------------------------------
// Palette
// ------------------------------------------------------------

/// Representative colors ordered by non-decreasing HSV value.
///
/// Index 0 is the darkest entry and the last index the lightest. A palette
/// always holds at least one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

/// One palette entry with its derived HSV and mood label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub color: Color,
    pub hsv: HsvColor,
    pub psychology: Psychology,
}

impl Palette {
    /// Sort raw centroids into a palette.
    ///
    /// Ties in brightness keep their original centroid order.
    pub fn from_centroids(centroids: Vec<Color>) -> Result<Self> {
        if centroids.is_empty() {
            return Err(PaletteError::processing("palette needs at least one color"));
        }

        let mut keyed: Vec<(u8, usize, Color)> = centroids
            .into_iter()
            .enumerate()
            .map(|(index, color)| (rgb_to_hsv(color).value, index, color))
            .collect();
        keyed.sort_by_key(|&(value, index, _)| (value, index));

        Ok(Self {
            colors: keyed.into_iter().map(|(_, _, color)| color).collect(),
        })
    }

    /// Build a palette from hex strings instead of clustering.
    pub fn from_hex_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let colors = codes
            .iter()
            .map(|code| parse_color(code.as_ref().trim()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_centroids(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn darkest(&self) -> Color {
        self.colors[0]
    }

    pub fn lightest(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }

    /// Entry at `index`, clamped into range.
    pub fn clamped(&self, index: usize) -> Color {
        self.colors[index.min(self.colors.len() - 1)]
    }

    /// `#rrggbb` codes in palette order
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|&c| rgb_to_hex_code(c)).collect()
    }

    /// `#rrggbbaa` codes (opaque) in palette order
    pub fn hex_codes_with_alpha(&self) -> Vec<String> {
        self.colors.iter().map(|&c| rgb_to_hex(c, 255)).collect()
    }

    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + '_ {
        self.colors.iter().enumerate().map(|(index, &color)| {
            let hsv = rgb_to_hsv(color);
            Swatch {
                index,
                color,
                hsv,
                psychology: describe(hsv.hue),
            }
        })
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ------------------------------------------------------------
// Extraction
// ------------------------------------------------------------

/// Extract `k` colors with the default clustering parameters.
pub fn extract(image: &RgbImage, k: usize) -> Result<Palette> {
    extract_with(image, &ExtractionConfig::with_colors(k))
}

/// Extract `config.n_colors` colors from an RGB buffer.
///
/// # Errors
///
/// `Processing` if the image has no pixels, if `n_colors` is zero or above
/// [`MAX_COLORS`], or if the image holds fewer distinct colors than requested.
pub fn extract_with(image: &RgbImage, config: &ExtractionConfig) -> Result<Palette> {
    let k = config.n_colors;
    if k == 0 || k > MAX_COLORS {
        return Err(PaletteError::processing(format!(
            "number of colors must be between 1 and {MAX_COLORS}, got {k}"
        )));
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PaletteError::processing("image has no pixels"));
    }

    let working = match config.downscale {
        Some(side) => downscale(image, side)?,
        None => Cow::Borrowed(image),
    };

    let distinct: HashSet<[u8; 3]> = working.pixels().map(|p| p.0).collect();
    if k > distinct.len() {
        return Err(PaletteError::processing(format!(
            "requested {k} colors but the image has only {} distinct colors",
            distinct.len()
        )));
    }

    let samples: Vec<Srgb> = working
        .pixels()
        .map(|p| Srgb::<u8>::new(p[0], p[1], p[2]).into_format::<f32>())
        .collect();

    debug!(
        k,
        pixels = samples.len(),
        distinct = distinct.len(),
        seed = config.seed,
        "running k-means"
    );

    let kmeans = get_kmeans(
        k,
        config.max_iterations,
        config.convergence,
        false,
        &samples,
        config.seed,
    );
    debug!(score = kmeans.score, "k-means finished");

    let centroids: Vec<Color> = kmeans
        .centroids
        .iter()
        .map(|&c| c.into_format::<u8>())
        .collect();

    Palette::from_centroids(centroids)
}

/// Nearest-neighbour resize so the longest side is at most `side` pixels.
fn downscale(image: &RgbImage, side: u32) -> Result<Cow<'_, RgbImage>> {
    if side == 0 {
        return Err(PaletteError::processing("downscale size must be positive"));
    }

    let (orig_w, orig_h) = image.dimensions();
    let max_side = orig_w.max(orig_h);
    if max_side <= side {
        return Ok(Cow::Borrowed(image));
    }

    let ratio = side as f32 / max_side as f32;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    Ok(Cow::Owned(image::imageops::resize(image, w, h, FilterType::Nearest)))
}
