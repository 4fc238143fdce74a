//! Icon+label control.
//!
//! A compound control showing a tinted icon next to a text label, with
//! optional edge dividers. Two layout modes:
//!
//! - **centered**: icon and label form one block, horizontally centered in
//!   the control's surface.
//! - **pinned**: icon sits at `icon_margin_left` from the left edge and the
//!   label is right-aligned at `text_margin_right` from the right edge.
//!
//! Geometry is recomputed from the current surface size on every draw pass
//! ([`IconLabel::layout`] is a pure function), so the control follows
//! resizes without cached state. Paint order is fixed: icon, label,
//! dividers.
//!
//! `set_color` updates the label color and the icon tint together - the
//! control shares one ink color between both.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};

use crate::{
    colors::{DIVIDER_GRAY, INK},
    config::{
        DEFAULT_DIVIDER_WIDTH_DP, DEFAULT_ICON_MARGIN_LEFT_DP, DEFAULT_ICON_SIZE_DP, DEFAULT_ICON_TEXT_SPACE_DP,
        DEFAULT_TEXT_MARGIN_RIGHT_DP, DENSITY,
    },
    error::ConfigError,
    icons::IconBitmap,
    styles::{CONTROL_FONT, text_width},
    widgets::divider::{DividerEdges, draw_dividers},
};

/// Construction-time configuration for [`IconLabel`].
///
/// Dimensions are in dp and scaled by `density` when the control is built.
/// [`IconLabelConfig::new`] fills every field except icon and label with
/// the named defaults from [`crate::config`].
pub struct IconLabelConfig {
    pub icon: &'static IconBitmap,
    pub icon_color: Rgb565,
    pub icon_size_dp: f32,
    pub icon_margin_left_dp: f32,
    pub text_margin_right_dp: f32,
    pub icon_text_space_dp: f32,
    pub label: &'static str,
    pub label_color: Rgb565,
    pub label_font: &'static MonoFont<'static>,
    pub dividers: DividerEdges,
    pub divider_color: Rgb565,
    pub divider_width_dp: f32,
    pub centered: bool,
    pub density: f32,
}

impl IconLabelConfig {
    /// Configuration with the default dimensions, ink color, and centered
    /// layout.
    pub fn new(icon: &'static IconBitmap, label: &'static str) -> Self {
        Self {
            icon,
            icon_color: INK,
            icon_size_dp: DEFAULT_ICON_SIZE_DP,
            icon_margin_left_dp: DEFAULT_ICON_MARGIN_LEFT_DP,
            text_margin_right_dp: DEFAULT_TEXT_MARGIN_RIGHT_DP,
            icon_text_space_dp: DEFAULT_ICON_TEXT_SPACE_DP,
            label,
            label_color: INK,
            label_font: CONTROL_FONT,
            dividers: DividerEdges::NONE,
            divider_color: DIVIDER_GRAY,
            divider_width_dp: DEFAULT_DIVIDER_WIDTH_DP,
            centered: true,
            density: DENSITY,
        }
    }
}

/// Placement computed for one draw pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IconLabelLayout {
    /// Icon bounds, vertically centered in the surface.
    pub icon_rect: Rectangle,
    /// Top-left of the label cell; the label is drawn `Baseline::Top`.
    pub text_origin: Point,
    /// Measured label width in pixels.
    pub text_width: u32,
}

/// The icon+label control. See the module docs for the layout model.
#[derive(Debug)]
pub struct IconLabel {
    icon: &'static IconBitmap,
    tint: Rgb565,
    label: &'static str,
    label_color: Rgb565,
    label_font: &'static MonoFont<'static>,
    icon_size_px: f32,
    icon_margin_left_px: f32,
    text_margin_right_px: f32,
    icon_text_space_px: f32,
    text_width_px: f32,
    dividers: DividerEdges,
    divider_color: Rgb565,
    divider_stroke_px: u32,
    centered: bool,
    dirty: bool,
}

impl IconLabel {
    /// Resolve a configuration into a drawable control.
    ///
    /// Fails fast on a malformed icon bitmap or non-positive dimensions;
    /// there is no silent defaulting past this point.
    pub fn new(config: IconLabelConfig) -> Result<Self, ConfigError> {
        config.icon.validate()?;
        if config.density <= 0.0 {
            return Err(ConfigError::InvalidDimension("density must be positive"));
        }
        if config.icon_size_dp <= 0.0 {
            return Err(ConfigError::InvalidDimension("icon size must be positive"));
        }
        if config.label_font.character_size.height == 0 {
            return Err(ConfigError::InvalidDimension("label font height must be positive"));
        }

        let d = config.density;
        Ok(Self {
            icon: config.icon,
            tint: config.icon_color,
            label: config.label,
            label_color: config.label_color,
            label_font: config.label_font,
            icon_size_px: config.icon_size_dp * d,
            icon_margin_left_px: config.icon_margin_left_dp * d,
            text_margin_right_px: config.text_margin_right_dp * d,
            icon_text_space_px: config.icon_text_space_dp * d,
            // Full-string measurement; see DESIGN.md on the upstream
            // last-character quirk this deliberately does not reproduce.
            text_width_px: text_width(config.label_font, config.label),
            dividers: config.dividers,
            divider_color: config.divider_color,
            divider_stroke_px: ((config.divider_width_dp * d).max(1.0)) as u32,
            centered: config.centered,
            dirty: true,
        })
    }

    /// Replace the icon bitmap, keeping the current tint.
    pub fn set_icon(&mut self, icon: &'static IconBitmap) {
        self.icon = icon;
        self.dirty = true;
    }

    /// Update the shared ink color: label text and icon tint together.
    pub fn set_color(&mut self, color: Rgb565) {
        self.label_color = color;
        self.tint = color;
        self.dirty = true;
    }

    /// Consume the redraw flag. Returns true if a mutation happened since
    /// the last draw (or the control was never drawn).
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Compute placement for a surface of `size`.
    ///
    /// Pixel math follows the source contract: positions are computed in
    /// f32 and integer-truncated.
    pub fn layout(&self, size: Size) -> IconLabelLayout {
        let w = size.width as f32;
        let h = size.height as f32;

        let icon_y = h * 0.5 - self.icon_size_px * 0.5;
        let icon_x = if self.centered {
            w * 0.5 - (self.icon_text_space_px + self.icon_size_px + self.text_width_px) * 0.5
        } else {
            self.icon_margin_left_px
        };
        let icon_rect = Rectangle::new(
            Point::new(icon_x as i32, icon_y as i32),
            Size::new(self.icon_size_px as u32, self.icon_size_px as u32),
        );

        let text_y = h * 0.5 - self.label_font.character_size.height as f32 * 0.5;
        let text_x = if self.centered {
            icon_x + self.icon_size_px + self.icon_text_space_px
        } else {
            w - self.text_width_px - self.text_margin_right_px
        };

        IconLabelLayout {
            icon_rect,
            text_origin: Point::new(text_x as i32, text_y as i32),
            text_width: self.text_width_px as u32,
        }
    }

    /// Draw the control into `bounds` on `display`.
    ///
    /// Paint order: icon, label, dividers.
    pub fn draw<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut surface = display.translated(bounds.top_left);
        let layout = self.layout(bounds.size);

        self.icon.draw_tinted(&mut surface, layout.icon_rect, self.tint)?;

        let style = MonoTextStyle::new(self.label_font, self.label_color);
        Text::with_baseline(self.label, layout.text_origin, style, Baseline::Top).draw(&mut surface)?;

        draw_dividers(&mut surface, bounds.size, self.dividers, self.divider_color, self.divider_stroke_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLOOD_ORANGE;
    use crate::icons::{CLIENT, SALE};

    const SURFACE: Size = Size::new(200, 100);

    fn config() -> IconLabelConfig {
        // 3 chars at 10px advance gives text_width = 30
        IconLabelConfig::new(&CLIENT, "BUY")
    }

    #[test]
    fn test_centered_layout_reference_values() {
        // icon_size=34, density=1, W=200, H=100, spacing=24, text_width=30:
        //   x = 100 - (24 + 34 + 30)/2 = 56, y = 50 - 17 = 33
        let control = IconLabel::new(config()).unwrap();
        let layout = control.layout(SURFACE);
        assert_eq!(layout.icon_rect.top_left, Point::new(56, 33));
        assert_eq!(layout.icon_rect.size, Size::new(34, 34));
        // Label follows icon + spacing: 56 + 34 + 24 = 114; FONT_10X20 is
        // 20px tall, so the cell top sits at 50 - 10 = 40
        assert_eq!(layout.text_origin, Point::new(114, 40));
        assert_eq!(layout.text_width, 30);
    }

    #[test]
    fn test_centered_group_is_centered() {
        let control = IconLabel::new(config()).unwrap();
        let layout = control.layout(SURFACE);
        // Block spans icon + spacing + text; its midpoint is the surface's
        // horizontal center (within truncation)
        let block_left = layout.icon_rect.top_left.x;
        let block_right = layout.text_origin.x + layout.text_width as i32;
        let mid = (block_left + block_right) / 2;
        assert!((mid - 100).abs() <= 1, "block midpoint {mid} should be near 100");
    }

    #[test]
    fn test_pinned_layout_edges_exact() {
        let mut cfg = config();
        cfg.centered = false;
        let control = IconLabel::new(cfg).unwrap();
        let layout = control.layout(SURFACE);

        assert_eq!(layout.icon_rect.top_left.x, 24, "icon pinned at icon_margin_left");
        let text_right = layout.text_origin.x + layout.text_width as i32;
        assert_eq!(text_right, 200 - 24, "label right edge at W - text_margin_right");
    }

    #[test]
    fn test_layout_tracks_surface_size() {
        let control = IconLabel::new(config()).unwrap();
        let a = control.layout(SURFACE);
        let b = control.layout(Size::new(320, 56));
        assert_ne!(a, b, "layout is recomputed from the surface size");
        assert_eq!(b.icon_rect.top_left.y, (56.0_f32 * 0.5 - 17.0) as i32);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let control = IconLabel::new(config()).unwrap();
        assert_eq!(control.layout(SURFACE), control.layout(SURFACE));
    }

    #[test]
    fn test_density_scales_dimensions() {
        let mut cfg = config();
        cfg.density = 2.0;
        let control = IconLabel::new(cfg).unwrap();
        let layout = control.layout(Size::new(400, 200));
        assert_eq!(layout.icon_rect.size, Size::new(68, 68));
    }

    #[test]
    fn test_zero_icon_size_rejected() {
        let mut cfg = config();
        cfg.icon_size_dp = 0.0;
        assert_eq!(
            IconLabel::new(cfg).unwrap_err(),
            ConfigError::InvalidDimension("icon size must be positive")
        );
    }

    #[test]
    fn test_bad_icon_rejected() {
        static TRUNCATED: IconBitmap = IconBitmap { width: 16, height: 16, data: &[0u8; 4] };
        let mut cfg = config();
        cfg.icon = &TRUNCATED;
        assert_eq!(IconLabel::new(cfg).unwrap_err(), ConfigError::BadIcon("data too short"));
    }

    #[test]
    fn test_set_color_marks_dirty() {
        let mut control = IconLabel::new(config()).unwrap();
        assert!(control.take_dirty(), "fresh control needs an initial draw");
        assert!(!control.take_dirty());

        control.set_color(BLOOD_ORANGE);
        assert!(control.take_dirty());
        assert_eq!(control.tint, BLOOD_ORANGE);
        assert_eq!(control.label_color, BLOOD_ORANGE, "label and tint share the color");
    }

    #[test]
    fn test_set_icon_keeps_tint() {
        let mut control = IconLabel::new(config()).unwrap();
        control.set_color(BLOOD_ORANGE);
        control.take_dirty();

        control.set_icon(&SALE);
        assert!(control.take_dirty());
        assert_eq!(control.tint, BLOOD_ORANGE, "replacing the icon preserves the tint");
    }
}
