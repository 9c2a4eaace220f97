//! CSS custom properties and utility classes for a palette.

use std::fmt::Write as _;

use crate::convert::{Color, rgb_to_hex};
use crate::extract::Palette;

const OPACITY_LEVELS: [u8; 5] = [90, 75, 50, 25, 10];

const SPACING: [(&str, &str); 5] = [
    ("xs", "0.25rem"),
    ("sm", "0.5rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
];

const RADII: [(&str, &str); 4] = [
    ("sm", "0.25rem"),
    ("md", "0.5rem"),
    ("lg", "1rem"),
    ("full", "9999px"),
];

const LAYOUT_CLASSES: [&str; 10] = [
    ".flex { display: flex; }",
    ".flex-col { flex-direction: column; }",
    ".items-center { align-items: center; }",
    ".justify-center { justify-content: center; }",
    ".gap-sm { gap: var(--spacing-sm); }",
    ".gap-md { gap: var(--spacing-md); }",
    ".p-sm { padding: var(--spacing-sm); }",
    ".p-md { padding: var(--spacing-md); }",
    ".rounded-sm { border-radius: var(--radius-sm); }",
    ".rounded-md { border-radius: var(--radius-md); }",
];

/// Named roles assigned by palette position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticRoles {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
}

impl SemanticRoles {
    pub const NAMES: [&'static str; 5] = ["primary", "secondary", "accent", "background", "text"];

    /// Accent is the darkest entry, background the second, secondary the
    /// second-to-last, primary and text the lightest.
    ///
    /// Positions are clamped, so a one-color palette fills every role with
    /// its only entry.
    pub fn from_palette(palette: &Palette) -> Self {
        let last = palette.len() - 1;
        Self {
            primary: palette.lightest(),
            secondary: palette.clamped(last.saturating_sub(1)),
            accent: palette.darkest(),
            background: palette.clamped(1),
            text: palette.lightest(),
        }
    }

    fn entries(&self) -> [(&'static str, Color); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("text", self.text),
        ]
    }
}

/// Render the style sheet text for `palette`.
pub fn style_sheet(palette: &Palette) -> String {
    let roles = SemanticRoles::from_palette(palette);
    let mut css = String::new();

    // Writing into a String cannot fail.
    let _ = write_variables(&mut css, palette, &roles);
    let _ = write_classes(&mut css, palette);
    css
}

fn write_variables(css: &mut String, palette: &Palette, roles: &SemanticRoles) -> std::fmt::Result {
    writeln!(css, "/* Generated palette variables */")?;
    writeln!(css, ":root {{")?;

    for (i, &color) in palette.iter().enumerate() {
        writeln!(css, "    --color-{}: {};", i + 1, rgb_to_hex(color, 255))?;
    }

    writeln!(css, "\n    /* Semantic colors */")?;
    for (name, color) in roles.entries() {
        writeln!(css, "    --color-{name}: {};", rgb_to_hex(color, 255))?;
    }

    writeln!(css, "\n    /* Opacity */")?;
    for alpha in OPACITY_LEVELS {
        writeln!(css, "    --opacity-{alpha}: {alpha}%;")?;
    }

    writeln!(css, "\n    /* Spacing */")?;
    for (name, size) in SPACING {
        writeln!(css, "    --spacing-{name}: {size};")?;
    }

    writeln!(css, "\n    /* Corner radius */")?;
    for (name, size) in RADII {
        writeln!(css, "    --radius-{name}: {size};")?;
    }

    writeln!(css, "}}\n")
}

fn write_classes(css: &mut String, palette: &Palette) -> std::fmt::Result {
    writeln!(css, "/* Color utilities */")?;
    for i in 1..=palette.len() {
        let class = format!("color-{i}");
        write_color_rules(css, &class, &class)?;
    }

    writeln!(css, "\n/* Semantic utilities */")?;
    for name in SemanticRoles::NAMES {
        write_color_rules(css, name, &format!("color-{name}"))?;
    }

    writeln!(css, "\n/* Layout utilities */")?;
    for rule in LAYOUT_CLASSES {
        writeln!(css, "{rule}")?;
    }
    Ok(())
}

/// Background, text, border and hover rules for `class`, reading `--<var>`.
fn write_color_rules(css: &mut String, class: &str, var: &str) -> std::fmt::Result {
    let var = format!("--{var}");
    writeln!(css, ".bg-{class} {{ background-color: var({var}); }}")?;
    writeln!(css, ".text-{class} {{ color: var({var}); }}")?;
    writeln!(css, ".border-{class} {{ border-color: var({var}); }}")?;
    writeln!(css, ".hover\\:bg-{class}:hover {{ background-color: var({var}); }}")
}
