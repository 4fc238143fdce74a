// Crate-level lints: allow common pixel-math patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in layout calculations
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::struct_excessive_bools)] // DividerEdges is four independent flags

//! Checkout customer display widgets.
//!
//! Compound controls for a 320x240 point-of-sale panel, drawn through
//! `embedded-graphics` onto any `DrawTarget<Color = Rgb565>`:
//!
//! - [`widgets::IconLabel`]: tinted icon next to a text label, centered or
//!   edge-pinned, with per-edge dividers.
//! - [`widgets::BadgedIcon`]: centered icon with an optional notification
//!   badge circle.
//! - [`screens::CheckoutScreen`]: the demo screen wiring three controls
//!   over a scrollable receipt list.
//!
//! Dimensions are specified in dp and resolved to pixels through a density
//! factor at construction; layout is recomputed from the surface size on
//! every draw pass. Mutations set dirty flags that the owner polls to
//! schedule redraws.

pub mod colors;
pub mod config;
pub mod error;
pub mod icons;
pub mod items;
pub mod screens;
pub mod state;
pub mod styles;
pub mod widgets;
