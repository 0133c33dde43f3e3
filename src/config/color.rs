use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixelgridError, PixelgridResult};

/// Parse a `#RRGGBB` or `#RRGGBBAA` hex color (leading `#` optional,
/// case-insensitive, surrounding whitespace ignored).
pub fn parse_hex(s: &str) -> PixelgridResult<Rgba8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> PixelgridResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| PixelgridError::config(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(PixelgridError::config(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        ));
    }

    match s.len() {
        6 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: 255,
        }),
        8 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err(PixelgridError::config(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

/// Parse a comma-separated palette, dropping entries that fail to parse.
/// Returns `None` when no entry survives so callers can fall back.
pub(crate) fn parse_palette(list: &str) -> Option<Vec<Rgba8>> {
    let colors: Vec<Rgba8> = list
        .split(',')
        .filter_map(|entry| parse_hex(entry).ok())
        .collect();
    if colors.is_empty() { None } else { Some(colors) }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
