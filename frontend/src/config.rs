use log::Level;

/// WhatsApp number every contact request is delivered to.
pub const DESTINATION_PHONE: &str = "+5547991897333";

pub const DEEP_LINK_BASE: &str = "https://api.whatsapp.com/send";

/// How long a success banner stays put before it starts sliding out.
pub const BANNER_DISPLAY_MS: u32 = 3_000;
pub const BANNER_EXIT_MS: u32 = 300;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
