//! Color constants for the checkout display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Standard colors come from the `RgbColor` trait constants; the sample
//! palette (near-black ink, light dividers, blood orange accent) is
//! application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure white (31, 63, 31). Badge text and content panel background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Palette Colors (application-specific)
// =============================================================================

/// Near-black ink used for inactive control text and icon tint.
/// Roughly 80% black: 8-bit (51, 51, 51).
pub const INK: Rgb565 = Rgb565::new(6, 12, 6);

/// Light gray for divider lines, subtle against the white panel.
/// Roughly 12% black: 8-bit (224, 224, 224).
pub const DIVIDER_GRAY: Rgb565 = Rgb565::new(28, 56, 28);

/// Blood orange accent. Active control tint and badge circle fill.
/// 8-bit (209, 70, 47).
pub const BLOOD_ORANGE: Rgb565 = Rgb565::new(26, 17, 5);

/// Muted gray for secondary row text (bonuses, quantity).
/// Roughly 45% black: 8-bit (140, 140, 140).
pub const SECONDARY_GRAY: Rgb565 = Rgb565::new(17, 35, 17);
