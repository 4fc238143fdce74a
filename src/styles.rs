//! Pre-computed static text styles and label metrics.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so the fixed styles live in the binary's
//! read-only section instead of being rebuilt every frame. Styles whose
//! color changes at runtime (control labels follow the tint color) are
//! created from the exposed font references instead:
//! `MonoTextStyle::new(CONTROL_FONT, dynamic_color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{INK, SECONDARY_GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Right-aligned text anchored at its top edge. Used for the quantity and
/// price columns in receipt rows.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Control label font (10x20 pixels). The control text style is built at
/// runtime because its color follows the control's tint.
pub const CONTROL_FONT: &MonoFont = &FONT_10X20;

/// Badge text font (6x10 pixels). Small enough to sit inside the badge
/// circle at both radii.
pub const BADGE_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// White badge text on the badge circle.
pub const BADGE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Primary row text (names, prices) in near-black ink.
pub const ROW_STYLE_INK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, INK);

/// Secondary row text (bonuses, quantities) in muted gray.
pub const ROW_STYLE_SECONDARY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, SECONDARY_GRAY);

// =============================================================================
// Label Metrics
// =============================================================================

/// Measure the rendered width of `text` under a mono font.
///
/// Mono fonts advance by a fixed amount per character, so the full-string
/// width is exact; no per-glyph bounds are needed.
pub fn text_width(font: &MonoFont, text: &str) -> f32 {
    let advance = font.character_size.width + font.character_spacing;
    (text.chars().count() as u32 * advance) as f32
}
