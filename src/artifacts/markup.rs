//! Minimal HTML preview linking the generated style sheet.

use crate::artifacts::ArtifactKind;
use crate::convert::{contrast_text, rgb_to_hex, rgb_to_hex_code};
use crate::extract::Palette;

/// Render a page with one row per palette entry, each on its own background.
pub fn markup(palette: &Palette) -> String {
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "    <meta charset='utf-8'>".to_string(),
        "    <title>Color Palette</title>".to_string(),
        format!(
            "    <link rel='stylesheet' href='{}'>",
            ArtifactKind::StyleSheet.file_name()
        ),
        "</head>".to_string(),
        "<body class='flex flex-col gap-md p-md'>".to_string(),
        "    <h1 class='text-primary'>Extracted Color Palette</h1>".to_string(),
        "    <div class='flex flex-col gap-sm'>".to_string(),
    ];

    for (i, &color) in palette.iter().enumerate() {
        lines.push(format!(
            "        <div class='flex items-center bg-color-{} rounded-md p-md'>\
             <span style='color: {}'>{}</span></div>",
            i + 1,
            rgb_to_hex_code(contrast_text(color)),
            rgb_to_hex(color, 255),
        ));
    }

    lines.extend(
        ["    </div>", "</body>", "</html>"]
            .into_iter()
            .map(String::from),
    );
    lines.join("\n")
}
