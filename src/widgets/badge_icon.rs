//! Centered icon with an optional notification badge.
//!
//! The icon sits in the middle of the control's surface. When badge text is
//! present, a filled circle is drawn near the icon's bottom-right corner
//! (offset `0.8 x icon_size` from the icon origin on both axes) with the
//! text centered on the circle. The circle radius is two-tier: `10 x
//! density` for a single character, `15 x density` for anything longer.
//!
//! Badge mutations ([`BadgedIcon::add_circle_text`] /
//! [`BadgedIcon::remove_circle_text`]) re-measure the text and mark the
//! control dirty; the owner schedules the redraw.
//!
//! Paint order is fixed: icon, badge circle, badge text, dividers.

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use crate::{
    colors::{BLOOD_ORANGE, DIVIDER_GRAY, INK},
    config::{
        BADGE_OFFSET_FACTOR, BADGE_RADIUS_LONG_DP, BADGE_RADIUS_SHORT_DP, DEFAULT_DIVIDER_WIDTH_DP,
        DEFAULT_ICON_SIZE_DP, DENSITY,
    },
    error::ConfigError,
    icons::IconBitmap,
    styles::{BADGE_FONT, BADGE_STYLE_WHITE, text_width},
    widgets::divider::{DividerEdges, draw_dividers},
};

/// Longest badge text kept; anything longer is truncated on the way in.
const BADGE_TEXT_CAP: usize = 8;

/// Construction-time configuration for [`BadgedIcon`].
pub struct BadgedIconConfig {
    pub icon: &'static IconBitmap,
    pub icon_color: Rgb565,
    pub icon_size_dp: f32,
    pub badge_color: Rgb565,
    pub dividers: DividerEdges,
    pub divider_color: Rgb565,
    pub divider_width_dp: f32,
    pub density: f32,
}

impl BadgedIconConfig {
    /// Configuration with default dimensions, ink tint, and the blood
    /// orange badge.
    pub fn new(icon: &'static IconBitmap) -> Self {
        Self {
            icon,
            icon_color: INK,
            icon_size_dp: DEFAULT_ICON_SIZE_DP,
            badge_color: BLOOD_ORANGE,
            dividers: DividerEdges::NONE,
            divider_color: DIVIDER_GRAY,
            divider_width_dp: DEFAULT_DIVIDER_WIDTH_DP,
            density: DENSITY,
        }
    }
}

/// Badge placement for one draw pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BadgeLayout {
    /// Center of the badge circle.
    pub center: Point,
    /// Circle radius in pixels.
    pub radius: u32,
    /// Top-left of the badge text cell (drawn `Baseline::Top`).
    pub text_origin: Point,
}

/// Placement computed for one draw pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BadgedIconLayout {
    /// Icon bounds, centered in the surface.
    pub icon_rect: Rectangle,
    /// Present only while badge text is set.
    pub badge: Option<BadgeLayout>,
}

/// Centered icon control with the optional badge overlay.
#[derive(Debug)]
pub struct BadgedIcon {
    icon: &'static IconBitmap,
    tint: Rgb565,
    icon_size_px: f32,
    badge_color: Rgb565,
    badge_font: &'static MonoFont<'static>,
    badge_text: Option<String<BADGE_TEXT_CAP>>,
    badge_text_width_px: f32,
    badge_radius_px: f32,
    dividers: DividerEdges,
    divider_color: Rgb565,
    divider_stroke_px: u32,
    density: f32,
    dirty: bool,
}

impl BadgedIcon {
    /// Resolve a configuration into a drawable control. Starts with no
    /// badge.
    pub fn new(config: BadgedIconConfig) -> Result<Self, ConfigError> {
        config.icon.validate()?;
        if config.density <= 0.0 {
            return Err(ConfigError::InvalidDimension("density must be positive"));
        }
        if config.icon_size_dp <= 0.0 {
            return Err(ConfigError::InvalidDimension("icon size must be positive"));
        }

        let d = config.density;
        Ok(Self {
            icon: config.icon,
            tint: config.icon_color,
            icon_size_px: config.icon_size_dp * d,
            badge_color: config.badge_color,
            badge_font: BADGE_FONT,
            badge_text: None,
            badge_text_width_px: 0.0,
            badge_radius_px: BADGE_RADIUS_SHORT_DP * d,
            dividers: config.dividers,
            divider_color: config.divider_color,
            divider_stroke_px: ((config.divider_width_dp * d).max(1.0)) as u32,
            density: d,
            dirty: true,
        })
    }

    /// Set the badge text and re-measure it.
    ///
    /// The radius rule is two-tier only: `10 x density` for at most one
    /// character, `15 x density` otherwise. Text longer than the internal
    /// capacity is truncated.
    pub fn add_circle_text(&mut self, text: &str) {
        let mut stored: String<BADGE_TEXT_CAP> = String::new();
        for c in text.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        self.badge_text_width_px = text_width(self.badge_font, &stored);
        self.badge_radius_px = if stored.chars().count() <= 1 {
            BADGE_RADIUS_SHORT_DP * self.density
        } else {
            BADGE_RADIUS_LONG_DP * self.density
        };
        self.badge_text = Some(stored);
        self.dirty = true;
    }

    /// Clear the badge. The next draw pass omits circle and text entirely.
    pub fn remove_circle_text(&mut self) {
        self.badge_text = None;
        self.dirty = true;
    }

    /// Whether badge text is currently set.
    pub fn has_badge(&self) -> bool {
        self.badge_text.is_some()
    }

    /// Replace the icon bitmap, keeping the current tint.
    pub fn set_icon(&mut self, icon: &'static IconBitmap) {
        self.icon = icon;
        self.dirty = true;
    }

    /// Update the icon tint.
    pub fn set_color(&mut self, color: Rgb565) {
        self.tint = color;
        self.dirty = true;
    }

    /// Consume the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    /// Compute placement for a surface of `size`.
    pub fn layout(&self, size: Size) -> BadgedIconLayout {
        let w = size.width as f32;
        let h = size.height as f32;

        let icon_x = w * 0.5 - self.icon_size_px * 0.5;
        let icon_y = h * 0.5 - self.icon_size_px * 0.5;
        let icon_rect = Rectangle::new(
            Point::new(icon_x as i32, icon_y as i32),
            Size::new(self.icon_size_px as u32, self.icon_size_px as u32),
        );

        let badge = self.badge_text.as_ref().map(|_| {
            let cx = icon_x + self.icon_size_px * BADGE_OFFSET_FACTOR;
            let cy = icon_y + self.icon_size_px * BADGE_OFFSET_FACTOR;
            let text_x = cx - self.badge_text_width_px * 0.5;
            let text_y = cy - self.badge_font.character_size.height as f32 * 0.5;
            BadgeLayout {
                center: Point::new(cx as i32, cy as i32),
                radius: self.badge_radius_px as u32,
                text_origin: Point::new(text_x as i32, text_y as i32),
            }
        });

        BadgedIconLayout { icon_rect, badge }
    }

    /// Draw the control into `bounds` on `display`.
    ///
    /// Paint order: icon, badge circle, badge text, dividers.
    pub fn draw<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut surface = display.translated(bounds.top_left);
        let layout = self.layout(bounds.size);

        self.icon.draw_tinted(&mut surface, layout.icon_rect, self.tint)?;

        if let (Some(text), Some(badge)) = (self.badge_text.as_ref(), layout.badge) {
            Circle::with_center(badge.center, badge.radius * 2)
                .into_styled(PrimitiveStyle::with_fill(self.badge_color))
                .draw(&mut surface)?;
            Text::with_baseline(text, badge.text_origin, BADGE_STYLE_WHITE, Baseline::Top).draw(&mut surface)?;
        }

        draw_dividers(&mut surface, bounds.size, self.dividers, self.divider_color, self.divider_stroke_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::BILL;

    const SURFACE: Size = Size::new(80, 56);

    fn control() -> BadgedIcon {
        BadgedIcon::new(BadgedIconConfig::new(&BILL)).unwrap()
    }

    #[test]
    fn test_icon_centered_in_surface() {
        let layout = control().layout(SURFACE);
        // 80/2 - 34/2 = 23, 56/2 - 34/2 = 11
        assert_eq!(layout.icon_rect.top_left, Point::new(23, 11));
        assert!(layout.badge.is_none(), "fresh control has no badge");
    }

    #[test]
    fn test_badge_radius_two_tier() {
        let mut c = control();

        c.add_circle_text("7");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 10, "single char: 10 x density");

        c.add_circle_text("");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 10, "empty text counts as short");

        c.add_circle_text("12");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 15, "two chars: 15 x density");

        c.add_circle_text("100500");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 15);
    }

    #[test]
    fn test_badge_radius_scales_with_density() {
        let mut cfg = BadgedIconConfig::new(&BILL);
        cfg.density = 2.0;
        let mut c = BadgedIcon::new(cfg).unwrap();
        c.add_circle_text("7");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 20);
        c.add_circle_text("42");
        assert_eq!(c.layout(SURFACE).badge.unwrap().radius, 30);
    }

    #[test]
    fn test_badge_geometry() {
        let mut c = control();
        c.add_circle_text("7");
        let badge = c.layout(SURFACE).badge.unwrap();

        // Center offset 0.8 x 34 = 27.2 from the icon origin (23, 11)
        assert_eq!(badge.center, Point::new(50, 38));
        // Text centered on the circle: width 6, font height 10
        assert_eq!(badge.text_origin, Point::new(47, 33));
    }

    #[test]
    fn test_add_then_remove_returns_to_absent() {
        let mut c = control();
        c.take_dirty();

        c.add_circle_text("7");
        assert!(c.has_badge());
        assert!(c.take_dirty(), "add_circle_text schedules a redraw");

        c.remove_circle_text();
        assert!(!c.has_badge());
        assert!(c.take_dirty(), "remove_circle_text schedules a redraw");
        assert!(c.layout(SURFACE).badge.is_none(), "next pass omits the badge");
    }

    #[test]
    fn test_overlong_badge_text_truncated() {
        let mut c = control();
        c.add_circle_text("0123456789");
        assert_eq!(c.badge_text.as_deref(), Some("01234567"));
    }

    #[test]
    fn test_zero_icon_size_rejected() {
        let mut cfg = BadgedIconConfig::new(&BILL);
        cfg.icon_size_dp = 0.0;
        assert_eq!(
            BadgedIcon::new(cfg).unwrap_err(),
            ConfigError::InvalidDimension("icon size must be positive")
        );
    }
}
