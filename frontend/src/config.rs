#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    "http://localhost:3001/api/contact"  // Local relay stub when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    "https://formspree.io/f/xluxeliv"  // Production relay
}

/// How long the contact form success banner stays up.
pub const BANNER_DISPLAY_MS: u32 = 10_000;

pub const DEFAULT_DEBOUNCE_MS: u32 = 250;
pub const SCROLL_DEBOUNCE_MS: u32 = 16; // ~60fps

// Notification toast timings
pub const TOAST_SHOW_DELAY_MS: u32 = 100;
pub const TOAST_VISIBLE_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 300;

/// Simulated round trip for the newsletter signup.
pub const NEWSLETTER_DELAY_MS: u32 = 1_500;

pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const NAVBAR_HIDE_AFTER: f64 = 200.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const CARD_STAGGER_MS: u32 = 150;
pub const COLLECTION_STAGGER_MS: u32 = 200;
