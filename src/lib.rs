//! # Palette Extract
//!
//! Extracts a small palette of representative colors from an image, orders it
//! from darkest to lightest, and derives a CSS style sheet, an HTML preview, a
//! color card and a UI mock from it.
//!
//! The stages are independent: decode an image, cluster it into a
//! [`Palette`], then hand the palette to any of the generators in
//! [`artifacts`].
//!
//! ```rust,no_run
//! use palette_extract::{ArtifactSet, extract, load_image};
//! use std::path::Path;
//!
//! let image = load_image(Path::new("photo.jpg"))?;
//! let palette = extract(&image, 5)?;
//! println!("{:?}", palette.hex_codes());
//!
//! ArtifactSet::generate(&palette)?.write_to(Path::new("static/output"))?;
//! # Ok::<(), palette_extract::PaletteError>(())
//! ```

use js_sys::{Array, Object, Reflect, Uint8Array};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod artifacts;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod psychology;

pub use artifacts::{ArtifactKind, ArtifactPaths, ArtifactSet};
pub use config::{ExtractionConfig, PaletteConfig};
pub use convert::{Color, HsvColor, contrast_text, hex_to_rgb, parse_color, rgb_to_hex, rgb_to_hex_code, rgb_to_hsv};
pub use error::{PaletteError, Result};
pub use extract::{ImageSource, MAX_COLORS, Palette, Swatch, extract, extract_with, load_image, load_image_from_memory};
pub use psychology::{Psychology, describe};

/// What a front end reports back after an extraction: `#rrggbb` codes in
/// ascending brightness and the location of every artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub colors: Vec<String>,
    pub files: ArtifactPaths,
}

/// A palette together with the files written for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub palette: Palette,
    pub files: ArtifactPaths,
}

impl Extraction {
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary {
            colors: self.palette.hex_codes(),
            files: self.files.clone(),
        }
    }
}

// ------------------------------------------------------------
// Native pipeline
// ------------------------------------------------------------

/// Load, cluster and write all artifacts into `config.output_dir`.
///
/// Any failure aborts the run; artifacts written before the failure stay on
/// disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn run(source: ImageSource<'_>, config: &PaletteConfig) -> Result<Extraction> {
    let image = source.load()?;
    let palette = extract_with(&image, &config.extraction)?;
    publish(palette, &config.output_dir)
}

/// Log the palette and write its artifacts into `output_dir`.
#[cfg(not(target_arch = "wasm32"))]
pub fn publish(palette: Palette, output_dir: &std::path::Path) -> Result<Extraction> {
    for swatch in palette.swatches() {
        tracing::info!(
            index = swatch.index + 1,
            hex = %rgb_to_hex(swatch.color, 255),
            psychology = %swatch.psychology,
            "palette color"
        );
    }

    let files = ArtifactSet::generate(&palette)?.write_to(output_dir)?;
    Ok(Extraction { palette, files })
}

// ------------------------------------------------------------
// Browser binding
// ------------------------------------------------------------

/// Extract `n_colors` colors from an encoded image and return
/// `{ colors, css, html, colorCard, uiPreview }` with every artifact in memory.
#[wasm_bindgen]
pub fn extract_palette(input: Vec<u8>, n_colors: usize) -> std::result::Result<Object, JsValue> {
    let to_js = |e: PaletteError| JsValue::from_str(&e.to_string());

    let image = load_image_from_memory(&input).map_err(to_js)?;
    let palette = extract(&image, n_colors).map_err(to_js)?;
    let artifacts = ArtifactSet::generate(&palette).map_err(to_js)?;

    let colors = Array::new();
    for hex in palette.hex_codes() {
        colors.push(&JsValue::from_str(&hex));
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("colors"), &colors)?;
    Reflect::set(&result, &JsValue::from_str("css"), &JsValue::from_str(&artifacts.style_sheet))?;
    Reflect::set(&result, &JsValue::from_str("html"), &JsValue::from_str(&artifacts.markup))?;
    Reflect::set(
        &result,
        &JsValue::from_str("colorCard"),
        &Uint8Array::from(artifacts.color_card.as_slice()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("uiPreview"),
        &Uint8Array::from(artifacts.ui_preview.as_slice()),
    )?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_serialization() {
        let extraction = Extraction {
            palette: Palette::from_hex_codes(&["#ffffff", "#000000"]).unwrap(),
            files: ArtifactPaths {
                css: PathBuf::from("out/color_palette.css"),
                html: PathBuf::from("out/color_palette.html"),
                color_card: PathBuf::from("out/color_card.png"),
                ui_preview: PathBuf::from("out/ui_preview.png"),
            },
        };

        let summary = extraction.summary();
        assert_eq!(summary.colors, vec!["#000000", "#ffffff"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["colors"][1], "#ffffff");
        assert_eq!(json["files"]["color_card"], "out/color_card.png");

        let back: ExtractionSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
