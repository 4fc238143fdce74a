//! Checkout screen: control band and receipt list.
//!
//! Layout:
//!
//! ```text
//! ┌────────────┬────────────┬────────┐
//! │   CLIENT   │    SALE    │  bill  │  56px control band
//! ├────────────┴────────────┴────────┤
//! │ Ivanov Ivan Ivanych              │
//! │ potatoes            1 x 100 8,00 │  receipt list, 30px rows,
//! │ ...                              │  scrollable
//! └──────────────────────────────────┘
//! ```
//!
//! The client and sale controls toggle between ink and blood orange on
//! click; the bill control toggles its notification badge ("7"). Only the
//! rows inside the viewport are drawn; scrolling moves the window over the
//! backing slice and clamps at both ends.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::{
    colors::{BLOOD_ORANGE, DIVIDER_GRAY, INK, WHITE},
    config::{
        BILL_CONTROL_WIDTH, BILL_CONTROL_X, CONTROL_BAND_HEIGHT, LIST_HEIGHT, LIST_ROW_HEIGHT, LIST_Y,
        SALE_CONTROL_X, SCREEN_WIDTH, WIDE_CONTROL_WIDTH,
    },
    error::ConfigError,
    icons::{BILL, CLIENT, CLIENT_FILLED, SALE},
    items::{DEMO_ITEMS, ReceiptItem},
    state::ControlState,
    styles::{RIGHT_ALIGNED, ROW_STYLE_INK, ROW_STYLE_SECONDARY},
    widgets::{BadgedIcon, BadgedIconConfig, DividerEdges, IconLabel, IconLabelConfig},
};

/// Badge text shown while the bill control is active.
const BILL_BADGE_TEXT: &str = "7";

/// Horizontal padding inside list rows.
const ROW_PADDING_X: i32 = 8;

/// X position of the right-aligned quantity column.
const QUANTITY_COLUMN_RIGHT: i32 = 240;

/// Rows that fit the list viewport.
const VISIBLE_ROWS: usize = (LIST_HEIGHT / LIST_ROW_HEIGHT) as usize;

/// Hairline stroke for row separators.
const ROW_DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DIVIDER_GRAY, 1);

/// The demo's single screen: three header controls over the receipt list.
pub struct CheckoutScreen {
    client: IconLabel,
    sale: IconLabel,
    bill: BadgedIcon,
    client_state: ControlState,
    sale_state: ControlState,
    bill_state: ControlState,
    items: &'static [ReceiptItem],
    scroll: usize,
    dirty: bool,
}

impl CheckoutScreen {
    /// Build the screen with the demo receipt. Fails if any control
    /// configuration is invalid.
    pub fn new() -> Result<Self, ConfigError> {
        let client = IconLabel::new(IconLabelConfig {
            dividers: DividerEdges { bottom: true, right: true, ..DividerEdges::NONE },
            ..IconLabelConfig::new(&CLIENT, "CLIENT")
        })?;

        // Pinned mode: icon at the left edge, label at the right edge.
        // The default 24dp margins would overlap in a 120px control.
        let sale = IconLabel::new(IconLabelConfig {
            centered: false,
            icon_margin_left_dp: 8.0,
            text_margin_right_dp: 8.0,
            dividers: DividerEdges { bottom: true, right: true, ..DividerEdges::NONE },
            ..IconLabelConfig::new(&SALE, "SALE")
        })?;

        let bill = BadgedIcon::new(BadgedIconConfig {
            dividers: DividerEdges { bottom: true, ..DividerEdges::NONE },
            ..BadgedIconConfig::new(&BILL)
        })?;

        Ok(Self {
            client,
            sale,
            bill,
            client_state: ControlState::default(),
            sale_state: ControlState::default(),
            bill_state: ControlState::default(),
            items: &DEMO_ITEMS,
            scroll: 0,
            dirty: true,
        })
    }

    /// Click the client control: flip active state, swap the outline icon
    /// for the filled one, and recolor.
    pub fn toggle_client(&mut self) {
        self.client_state = self.client_state.toggle();
        let icon = if self.client_state.is_active() { &CLIENT_FILLED } else { &CLIENT };
        self.client.set_icon(icon);
        self.client.set_color(tint_for(self.client_state));
    }

    /// Click the sale control: flip active state and recolor.
    pub fn toggle_sale(&mut self) {
        self.sale_state = self.sale_state.toggle();
        self.sale.set_color(tint_for(self.sale_state));
    }

    /// Click the bill control: show or clear the notification badge.
    pub fn toggle_bill(&mut self) {
        self.bill_state = self.bill_state.toggle();
        if self.bill_state.is_active() {
            self.bill.add_circle_text(BILL_BADGE_TEXT);
        } else {
            self.bill.remove_circle_text();
        }
    }

    /// Whether the bill badge is currently shown.
    pub fn bill_badge_shown(&self) -> bool {
        self.bill.has_badge()
    }

    /// Scroll the list one row towards the top.
    pub fn scroll_up(&mut self) {
        if self.scroll > 0 {
            self.scroll -= 1;
            self.dirty = true;
        }
    }

    /// Scroll the list one row towards the bottom, clamped so the last
    /// page stays full.
    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
            self.dirty = true;
        }
    }

    fn max_scroll(&self) -> usize {
        self.items.len().saturating_sub(VISIBLE_ROWS)
    }

    /// Index range of the rows inside the viewport.
    fn visible_range(&self) -> core::ops::Range<usize> {
        self.scroll..(self.scroll + VISIBLE_ROWS).min(self.items.len())
    }

    /// Whether anything changed since the last draw. Consumes all dirty
    /// flags, so call once per frame.
    pub fn needs_redraw(&mut self) -> bool {
        let screen = core::mem::take(&mut self.dirty);
        let client = self.client.take_dirty();
        let sale = self.sale.take_dirty();
        let bill = self.bill.take_dirty();
        screen || client || sale || bill
    }

    /// Paint the full screen: panel background, control band, visible
    /// receipt rows. A draw pass is idempotent - it depends only on
    /// current state and the display size.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(WHITE)?;

        let band = Size::new(WIDE_CONTROL_WIDTH, CONTROL_BAND_HEIGHT);
        self.client.draw(display, Rectangle::new(Point::zero(), band))?;
        self.sale.draw(display, Rectangle::new(Point::new(SALE_CONTROL_X, 0), band))?;
        self.bill.draw(
            display,
            Rectangle::new(Point::new(BILL_CONTROL_X, 0), Size::new(BILL_CONTROL_WIDTH, CONTROL_BAND_HEIGHT)),
        )?;

        for (slot, index) in self.visible_range().enumerate() {
            let y = LIST_Y + (slot as u32 * LIST_ROW_HEIGHT) as i32;
            match self.items[index] {
                ReceiptItem::Client { name, bonuses } => draw_client_row(display, y, name, bonuses)?,
                ReceiptItem::Product { name, quantity, price } => {
                    draw_product_row(display, y, name, quantity, price)?;
                }
            }
        }
        Ok(())
    }
}

/// Tint for a control in the given state: ink when inactive, blood orange
/// when active.
const fn tint_for(state: ControlState) -> Rgb565 {
    if state.is_active() { BLOOD_ORANGE } else { INK }
}

// =============================================================================
// Row Templates
// =============================================================================

/// Client template: name over the bonus balance.
fn draw_client_row<D>(display: &mut D, y: i32, name: &str, bonuses: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(name, Point::new(ROW_PADDING_X, y + 2), ROW_STYLE_INK, Baseline::Top).draw(display)?;
    Text::with_baseline(bonuses, Point::new(ROW_PADDING_X, y + 19), ROW_STYLE_SECONDARY, Baseline::Top)
        .draw(display)?;
    draw_row_separator(display, y)
}

/// Product template: name left, quantity and price in the right columns.
fn draw_product_row<D>(display: &mut D, y: i32, name: &str, quantity: &str, price: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(name, Point::new(ROW_PADDING_X, y + 7), ROW_STYLE_INK, Baseline::Top).draw(display)?;
    Text::with_text_style(
        quantity,
        Point::new(QUANTITY_COLUMN_RIGHT, y + 11),
        ROW_STYLE_SECONDARY,
        RIGHT_ALIGNED,
    )
    .draw(display)?;
    Text::with_text_style(
        price,
        Point::new(SCREEN_WIDTH as i32 - ROW_PADDING_X, y + 7),
        ROW_STYLE_INK,
        RIGHT_ALIGNED,
    )
    .draw(display)?;
    draw_row_separator(display, y)
}

fn draw_row_separator<D>(display: &mut D, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let sep_y = y + LIST_ROW_HEIGHT as i32 - 1;
    Line::new(Point::new(0, sep_y), Point::new(SCREEN_WIDTH as i32 - 1, sep_y))
        .into_styled(ROW_DIVIDER_STYLE)
        .draw(display)
}
