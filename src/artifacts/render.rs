//! Raster previews of a palette: a horizontal color card and a stacked UI mock.

use ab_glyph::{FontRef, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::convert::{Color, contrast_text, rgb_to_hex};
use crate::error::{PaletteError, Result};
use crate::extract::Palette;

static FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

const TITLE_HEIGHT: u32 = 48;
const TITLE_SCALE: f32 = 24.0;
const LABEL_SCALE: f32 = 16.0;

const CARD_WIDTH: u32 = 1000;
const CARD_MARGIN: u32 = 20;
const MIN_SWATCH_WIDTH: u32 = 96;
const SWATCH_HEIGHT: u32 = 120;
const CARD_LABEL_HEIGHT: u32 = 40;

const PREVIEW_WIDTH: u32 = 600;
const PREVIEW_BAND_AREA: u32 = 752;
const MIN_BAND_HEIGHT: u32 = 28;

fn font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_DATA).map_err(|e| PaletteError::Render {
        message: format!("bundled font is unreadable: {e}"),
        source: None,
    })
}

fn pixel(color: Color) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

/// Draw `text` horizontally centred on `center_x` with its top at `top`.
fn draw_centered(
    img: &mut RgbImage,
    font: &FontRef<'_>,
    scale: f32,
    ink: Rgb<u8>,
    center_x: u32,
    top: u32,
    text: &str,
) {
    let scale = PxScale::from(scale);
    let (w, _) = text_size(scale, font, text);
    let x = center_x as i32 - (w / 2) as i32;
    draw_text_mut(img, ink, x, top as i32, scale, font, text);
}

/// Equal-width swatches left to right in palette order, each with its hex
/// code underneath.
pub fn color_card(palette: &Palette) -> Result<RgbImage> {
    let font = font()?;
    let n = palette.len() as u32;
    let swatch_w = ((CARD_WIDTH - 2 * CARD_MARGIN) / n).max(MIN_SWATCH_WIDTH);
    let width = swatch_w * n + 2 * CARD_MARGIN;
    let height = TITLE_HEIGHT + SWATCH_HEIGHT + CARD_LABEL_HEIGHT;

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    draw_centered(&mut img, &font, TITLE_SCALE, INK, width / 2, 12, "Sorted Color Card");

    for (i, &color) in palette.iter().enumerate() {
        let x = CARD_MARGIN + i as u32 * swatch_w;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x as i32, TITLE_HEIGHT as i32).of_size(swatch_w, SWATCH_HEIGHT),
            pixel(color),
        );
        draw_centered(
            &mut img,
            &font,
            LABEL_SCALE,
            INK,
            x + swatch_w / 2,
            TITLE_HEIGHT + SWATCH_HEIGHT + 10,
            &rgb_to_hex(color, 255),
        );
    }

    Ok(img)
}

/// Full-width bands stacked bottom-up, darkest at the bottom, each labelled
/// in a contrasting color.
pub fn ui_preview(palette: &Palette) -> Result<RgbImage> {
    let font = font()?;
    let n = palette.len() as u32;
    let band_h = (PREVIEW_BAND_AREA / n).max(MIN_BAND_HEIGHT);
    let height = TITLE_HEIGHT + band_h * n;

    let mut img = RgbImage::from_pixel(PREVIEW_WIDTH, height, BACKGROUND);
    draw_centered(
        &mut img,
        &font,
        TITLE_SCALE,
        INK,
        PREVIEW_WIDTH / 2,
        12,
        "UI Preview with Sorted Colors",
    );

    let label_h = LABEL_SCALE as u32;
    for (i, &color) in palette.iter().enumerate() {
        let y = TITLE_HEIGHT + (n - 1 - i as u32) * band_h;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(0, y as i32).of_size(PREVIEW_WIDTH, band_h),
            pixel(color),
        );
        draw_centered(
            &mut img,
            &font,
            LABEL_SCALE,
            pixel(contrast_text(color)),
            PREVIEW_WIDTH / 2,
            y + band_h.saturating_sub(label_h) / 2,
            &rgb_to_hex(color, 255),
        );
    }

    Ok(img)
}

/// Encode an image as PNG bytes.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| PaletteError::render("PNG encode error", e))?;
    Ok(buf)
}
