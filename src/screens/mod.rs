//! Screens for the checkout display.

pub mod checkout;

pub use checkout::CheckoutScreen;
