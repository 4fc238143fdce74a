//! Application configuration constants.
//!
//! Layout values like `BILL_CONTROL_X` are computed at compile time as
//! `const`, avoiding per-frame arithmetic. Widget default dimensions are
//! given in density-independent units (dp) and scaled by [`DENSITY`] at
//! construction, mirroring how the physical panel's scale factor would be
//! applied on real hardware.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789-class panel: 320x240).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Device scale factor converting dp units to pixels.
/// The simulated panel is 1:1; window magnification is handled separately
/// by the simulator's output scale.
pub const DENSITY: f32 = 1.0;

// =============================================================================
// Widget Default Dimensions (dp, scaled by density at construction)
// =============================================================================

/// Default icon edge length.
pub const DEFAULT_ICON_SIZE_DP: f32 = 34.0;

/// Default left margin for the icon in pinned (non-centered) mode.
pub const DEFAULT_ICON_MARGIN_LEFT_DP: f32 = 24.0;

/// Default right margin for the label in pinned (non-centered) mode.
pub const DEFAULT_TEXT_MARGIN_RIGHT_DP: f32 = 24.0;

/// Default gap between icon and label in centered mode.
pub const DEFAULT_ICON_TEXT_SPACE_DP: f32 = 24.0;

/// Default divider line stroke width.
pub const DEFAULT_DIVIDER_WIDTH_DP: f32 = 1.0;

/// Badge circle radius for single-character badge text.
pub const BADGE_RADIUS_SHORT_DP: f32 = 10.0;

/// Badge circle radius for badge text of two or more characters.
pub const BADGE_RADIUS_LONG_DP: f32 = 15.0;

/// Badge center offset from the icon origin, as a fraction of icon size,
/// applied on both axes (puts the badge near the icon's bottom-right corner).
pub const BADGE_OFFSET_FACTOR: f32 = 0.8;

// =============================================================================
// Checkout Screen Layout
// =============================================================================

/// Height of the control band at the top of the screen.
pub const CONTROL_BAND_HEIGHT: u32 = 56;

/// Width of the client and sale controls.
pub const WIDE_CONTROL_WIDTH: u32 = 120;

/// X position of the sale control.
pub const SALE_CONTROL_X: i32 = WIDE_CONTROL_WIDTH as i32;

/// X position of the badged bill control (takes the remaining width).
pub const BILL_CONTROL_X: i32 = (WIDE_CONTROL_WIDTH * 2) as i32;

/// Width of the badged bill control.
pub const BILL_CONTROL_WIDTH: u32 = SCREEN_WIDTH - WIDE_CONTROL_WIDTH * 2;

/// Height of one receipt list row.
pub const LIST_ROW_HEIGHT: u32 = 30;

/// Y position of the receipt list viewport.
pub const LIST_Y: i32 = CONTROL_BAND_HEIGHT as i32;

/// Height of the receipt list viewport.
pub const LIST_HEIGHT: u32 = SCREEN_HEIGHT - CONTROL_BAND_HEIGHT;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
