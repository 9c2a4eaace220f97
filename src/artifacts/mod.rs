//! Files derived from a palette.
//!
//! Every generator is a pure function of the [`Palette`]. Writing is a
//! separate step that takes the target directory explicitly, so any subset of
//! artifacts can be produced without touching the others.

pub mod markup;
pub mod render;
pub mod stylesheet;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PaletteError, Result};
use crate::extract::Palette;

pub use markup::markup;
pub use render::{color_card, encode_png, ui_preview};
pub use stylesheet::{SemanticRoles, style_sheet};

/// The four artifact kinds and their fixed file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    StyleSheet,
    Markup,
    ColorCard,
    UiPreview,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::StyleSheet,
        ArtifactKind::Markup,
        ArtifactKind::ColorCard,
        ArtifactKind::UiPreview,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::StyleSheet => "color_palette.css",
            ArtifactKind::Markup => "color_palette.html",
            ArtifactKind::ColorCard => "color_card.png",
            ArtifactKind::UiPreview => "ui_preview.png",
        }
    }

    /// Generate this artifact's bytes.
    pub fn generate(self, palette: &Palette) -> Result<Vec<u8>> {
        match self {
            ArtifactKind::StyleSheet => Ok(style_sheet(palette).into_bytes()),
            ArtifactKind::Markup => Ok(markup(palette).into_bytes()),
            ArtifactKind::ColorCard => encode_png(&color_card(palette)?),
            ArtifactKind::UiPreview => encode_png(&ui_preview(palette)?),
        }
    }

    /// Generate this artifact and write it into `dir`, creating `dir` if needed.
    pub fn write(self, palette: &Palette, dir: &Path) -> Result<PathBuf> {
        let bytes = self.generate(palette)?;
        write_file(dir, self.file_name(), &bytes)
    }
}

/// All four artifacts held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSet {
    pub style_sheet: String,
    pub markup: String,
    pub color_card: Vec<u8>,
    pub ui_preview: Vec<u8>,
}

/// Where each artifact was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub css: PathBuf,
    pub html: PathBuf,
    pub color_card: PathBuf,
    pub ui_preview: PathBuf,
}

impl ArtifactSet {
    pub fn generate(palette: &Palette) -> Result<Self> {
        Ok(Self {
            style_sheet: style_sheet(palette),
            markup: markup(palette),
            color_card: encode_png(&color_card(palette)?)?,
            ui_preview: encode_png(&ui_preview(palette)?)?,
        })
    }

    pub fn bytes(&self, kind: ArtifactKind) -> &[u8] {
        match kind {
            ArtifactKind::StyleSheet => self.style_sheet.as_bytes(),
            ArtifactKind::Markup => self.markup.as_bytes(),
            ArtifactKind::ColorCard => &self.color_card,
            ArtifactKind::UiPreview => &self.ui_preview,
        }
    }

    /// Write every artifact into `dir`, overwriting earlier output.
    pub fn write_to(&self, dir: &Path) -> Result<ArtifactPaths> {
        let write = |kind: ArtifactKind| write_file(dir, kind.file_name(), self.bytes(kind));
        Ok(ArtifactPaths {
            css: write(ArtifactKind::StyleSheet)?,
            html: write(ArtifactKind::Markup)?,
            color_card: write(ArtifactKind::ColorCard)?,
            ui_preview: write(ArtifactKind::UiPreview)?,
        })
    }
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        PaletteError::render(format!("cannot create output directory {}", dir.display()), e)
    })?;

    let path = dir.join(name);
    fs::write(&path, bytes)
        .map_err(|e| PaletteError::render(format!("cannot write {}", path.display()), e))?;

    info!(path = %path.display(), bytes = bytes.len(), "artifact written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("palette-artifacts-{}-{name}", std::process::id()));
        fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_file_names_are_stable() {
        let names: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(
            names,
            vec!["color_palette.css", "color_palette.html", "color_card.png", "ui_preview.png"]
        );
    }

    #[test]
    fn test_single_kind_writes_only_its_file() {
        let dir = scratch_dir("single");
        let palette = Palette::from_hex_codes(&["#123456", "#abcdef"]).unwrap();

        let path = ArtifactKind::StyleSheet.write(&palette, &dir).unwrap();
        assert_eq!(path, dir.join("color_palette.css"));
        assert!(path.exists());
        assert!(!dir.join("color_card.png").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_to_overwrites_previous_output() {
        let dir = scratch_dir("overwrite");

        let first = Palette::from_hex_codes(&["#000000", "#ffffff"]).unwrap();
        ArtifactSet::generate(&first).unwrap().write_to(&dir).unwrap();

        let second = Palette::from_hex_codes(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        let set = ArtifactSet::generate(&second).unwrap();
        let paths = set.write_to(&dir).unwrap();

        let css = fs::read_to_string(&paths.css).unwrap();
        assert_eq!(css, set.style_sheet);
        assert!(css.contains("--color-3"));
        assert_eq!(fs::read(&paths.ui_preview).unwrap(), set.ui_preview);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unwritable_directory_is_render_error() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        fs::write(&dir, b"a file, not a directory").unwrap();

        let palette = Palette::from_hex_codes(&["#777777"]).unwrap();
        let err = ArtifactKind::Markup.write(&palette, &dir).unwrap_err();
        assert!(matches!(err, PaletteError::Render { .. }));

        fs::remove_file(&dir).ok();
    }

    #[test]
    fn test_generation_does_not_mutate_palette() {
        let palette = Palette::from_hex_codes(&["#aa0000", "#00aa00"]).unwrap();
        let before = palette.clone();
        ArtifactSet::generate(&palette).unwrap();
        assert_eq!(palette, before);
    }
}
