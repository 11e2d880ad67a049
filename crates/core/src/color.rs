//! Hex color helpers.

use tally_shared::{CommonsError, CommonsResult};

const EXPECTED_FORMAT: &str = "a color in the format #RRGGBB";

/// Returns true when the color is dark enough to need a light foreground.
///
/// A color counts as dark when the sum of its channels is below 500.
///
/// # Example
///
/// ```
/// use tally_core::color::is_dark;
///
/// assert!(is_dark("#000000").unwrap());
/// assert!(!is_dark("#FFFFFF").unwrap());
/// ```
pub fn is_dark(hex_color: &str) -> CommonsResult<bool> {
    let digits = hex_color
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .ok_or_else(|| CommonsError::parse(hex_color, EXPECTED_FORMAT))?;

    let color = u32::from_str_radix(digits, 16)
        .map_err(|_| CommonsError::parse(hex_color, EXPECTED_FORMAT))?;

    let brightness = (color >> 16) // R
        + ((color >> 8) & 0x00ff) // G
        + (color & 0x0000ff); // B

    Ok(brightness < 500)
}

/// Derives a deterministic `#RRGGBB` color from a seed.
///
/// The same seed always yields the same color, which makes it suitable for
/// tagging entities with stable colors.
#[must_use]
pub fn color_for(seed: u64) -> String {
    // 48-bit LCG step; only the high bits feed the color.
    let mixed = seed
        .wrapping_mul(0x5_DEEC_E66D)
        .wrapping_add(0xB)
        & 0xFFFF_FFFF_FFFF;

    format!("#{:06X}", (mixed >> 16) & 0x00FF_FFFF)
}
