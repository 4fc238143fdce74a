//! Widget components for the checkout display.
//!
//! - [`icon_label`]: the icon+label control (centered or edge-pinned).
//! - [`badge_icon`]: centered icon with an optional notification badge.
//! - [`divider`]: per-edge divider line segments shared by both controls.
//!
//! Each widget resolves its configuration once at construction, computes
//! placement from the current surface size on every draw pass, and paints
//! in a fixed order into any `DrawTarget<Color = Rgb565>`. Mutations set a
//! dirty flag; the owning screen polls the flags to schedule redraws.

pub mod badge_icon;
pub mod divider;
pub mod icon_label;

pub use badge_icon::{BadgedIcon, BadgedIconConfig};
pub use divider::DividerEdges;
pub use icon_label::{IconLabel, IconLabelConfig};
