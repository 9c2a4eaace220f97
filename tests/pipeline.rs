//! End-to-end tests: encoded image in, palette and four files out.

use image::{ImageFormat, Rgb, RgbImage};
use palette_extract::{
    ArtifactKind, ExtractionConfig, ImageSource, PaletteConfig, PaletteError, extract, rgb_to_hsv,
    run,
};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("palette-pipeline-{}-{name}", std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Four horizontal bands with a little noise in each.
fn banded_image() -> RgbImage {
    let bands = [[30, 30, 60], [200, 40, 40], [60, 170, 80], [240, 230, 200]];
    RgbImage::from_fn(32, 32, |x, y| {
        let [r, g, b] = bands[(y / 8) as usize];
        let jitter = ((x * 7 + y * 3) % 5) as u8;
        Rgb([r + jitter, g + jitter, b + jitter])
    })
}

fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn test_run_writes_all_artifacts() {
    let dir = scratch_dir("run");
    let bytes = png_bytes(&banded_image());
    let config = PaletteConfig {
        extraction: ExtractionConfig::with_colors(4),
        output_dir: dir.join("output"),
    };

    let extraction = run(ImageSource::Bytes(&bytes), &config).unwrap();
    let summary = extraction.summary();

    assert_eq!(summary.colors.len(), 4);
    assert!(summary.colors.iter().all(|c| c.len() == 7 && c.starts_with('#')));

    for kind in ArtifactKind::ALL {
        let path = config.output_dir.join(kind.file_name());
        assert!(path.is_file(), "{} missing", path.display());
    }
    assert_eq!(summary.files.css, config.output_dir.join("color_palette.css"));

    let css = std::fs::read_to_string(&summary.files.css).unwrap();
    assert!(css.contains("--color-4"));
    assert!(!css.contains("--color-5"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_run_from_file_path() {
    let dir = scratch_dir("path");
    let image_path = dir.join("upload.png");
    banded_image().save(&image_path).unwrap();

    let config = PaletteConfig {
        extraction: ExtractionConfig::with_colors(2),
        output_dir: dir.join("output"),
    };
    let extraction = run(ImageSource::Path(&image_path), &config).unwrap();
    assert_eq!(extraction.palette.len(), 2);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_extraction_is_deterministic() {
    let image = banded_image();
    let first = extract(&image, 4).unwrap();
    let second = extract(&image, 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_palette_sorted_by_value() {
    let image = banded_image();
    for k in 1..=6 {
        let palette = extract(&image, k).unwrap();
        assert_eq!(palette.len(), k);

        let values: Vec<u8> = palette.iter().map(|&c| rgb_to_hsv(c).value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "k = {k}: {values:?}");
    }
}

#[test]
fn test_red_blue_scenario() {
    let image = RgbImage::from_raw(2, 2, vec![255, 0, 0, 255, 0, 0, 0, 0, 255, 0, 0, 255]).unwrap();
    let palette = extract(&image, 2).unwrap();

    let mut hex = palette.hex_codes();
    hex.sort();
    assert_eq!(hex, vec!["#0000ff", "#ff0000"]);

    // Both have value 255, so the order is the centroid order, and must repeat.
    assert_eq!(palette, extract(&image, 2).unwrap());
}

#[test]
fn test_undecodable_upload_fails_at_load() {
    let dir = scratch_dir("garbage");
    let config = PaletteConfig {
        extraction: ExtractionConfig::default(),
        output_dir: dir.join("output"),
    };

    let err = run(ImageSource::Bytes(b"GIF89a but not really"), &config).unwrap_err();
    assert!(matches!(err, PaletteError::ImageLoad { .. }));
    assert!(!config.output_dir.exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_too_many_colors_fails_at_extract() {
    let dir = scratch_dir("too-many");
    let img = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    let bytes = png_bytes(&img);
    let config = PaletteConfig {
        extraction: ExtractionConfig::with_colors(2),
        output_dir: dir.join("output"),
    };

    let err = run(ImageSource::Bytes(&bytes), &config).unwrap_err();
    assert_eq!(err.stage(), "extract");

    std::fs::remove_dir_all(&dir).ok();
}
