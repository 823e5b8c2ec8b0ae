//! Font handle → display name table.
//!
//! Handles are the `<handle>` part of `var(--font-<handle>)` as declared by
//! the app's font loader. Unknown handles render verbatim.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
    Display,
    Script,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Display => "display",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontName {
    pub display_name: &'static str,
    pub family: FontFamily,
}

const FONT_TABLE: &[(&str, &str, FontFamily)] = &[
    ("inter", "Inter", FontFamily::SansSerif),
    ("geist", "Geist", FontFamily::SansSerif),
    ("geist-mono", "Geist Mono", FontFamily::Monospace),
    ("jetbrains", "JetBrains Mono", FontFamily::Monospace),
    ("jetbrains-mono", "JetBrains Mono", FontFamily::Monospace),
    ("ibm-plex-mono", "IBM Plex Mono", FontFamily::Monospace),
    ("space-mono", "Space Mono", FontFamily::Monospace),
    ("space-grotesk", "Space Grotesk", FontFamily::SansSerif),
    ("dm-sans", "DM Sans", FontFamily::SansSerif),
    ("manrope", "Manrope", FontFamily::SansSerif),
    ("outfit", "Outfit", FontFamily::SansSerif),
    ("syne", "Syne", FontFamily::Display),
    ("unbounded", "Unbounded", FontFamily::Display),
    ("bebas", "Bebas Neue", FontFamily::Display),
    ("anton", "Anton", FontFamily::Display),
    ("archivo-black", "Archivo Black", FontFamily::Display),
    ("playfair", "Playfair Display", FontFamily::Serif),
    ("cormorant", "Cormorant Garamond", FontFamily::Serif),
    ("fraunces", "Fraunces", FontFamily::Serif),
    ("instrument-serif", "Instrument Serif", FontFamily::Serif),
    ("dm-serif", "DM Serif Display", FontFamily::Serif),
    ("libre-baskerville", "Libre Baskerville", FontFamily::Serif),
    ("caveat", "Caveat", FontFamily::Script),
];

pub fn resolve(handle: &str) -> Option<FontName> {
    FONT_TABLE
        .iter()
        .find(|(h, _, _)| *h == handle)
        .map(|&(_, display_name, family)| FontName {
            display_name,
            family,
        })
}

/// `"JetBrains Mono (monospace)"` for known handles, the handle itself otherwise.
pub fn describe(handle: &str) -> String {
    match resolve(handle) {
        Some(font) => format!("{} ({})", font.display_name, font.family),
        None => handle.to_string(),
    }
}
