//! Checkout customer display demo.
//!
//! A 320x240 simulated panel showing a compound icon+label control, its
//! badged variant, and a scrollable receipt list. The simulator window
//! stands in for the physical display; key presses stand in for touch.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `C` | Toggle the client control (ink <-> blood orange) |
//! | `S` | Toggle the sale control |
//! | `B` | Toggle the bill badge ("7") |
//! | `Up`/`Down` | Scroll the receipt list |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Redraw policy
//!
//! Widget mutations and scrolling set dirty flags; the loop repaints the
//! whole screen only when something changed. Draw passes are idempotent:
//! layout is recomputed from current state and display size each time.

use std::thread;
use std::time::Instant;

use checkout_display::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use checkout_display::screens::CheckoutScreen;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Checkout Display", &output_settings);

    // Widget configuration errors are fatal; nothing can render without a
    // resolved icon.
    let mut screen = match CheckoutScreen::new() {
        Ok(screen) => screen,
        Err(e) => {
            log::error!("configuration error: {e}");
            return;
        }
    };

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            screen.toggle_client();
                            log::info!("client control toggled");
                        }
                        Keycode::S => {
                            screen.toggle_sale();
                            log::info!("sale control toggled");
                        }
                        Keycode::B => {
                            screen.toggle_bill();
                            log::info!(
                                "bill badge {}",
                                if screen.bill_badge_shown() { "shown" } else { "cleared" }
                            );
                        }
                        Keycode::Up => screen.scroll_up(),
                        Keycode::Down => screen.scroll_down(),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if screen.needs_redraw() {
            screen.draw(&mut display).ok();
            log::debug!("redraw in {:?}", frame_start.elapsed());
        }
        window.update(&display);

        // Sleep to maintain the target frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
