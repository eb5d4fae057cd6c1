/// Where accepted newsletter signups are posted. Set at build time with
/// `NEWSLETTER_ENDPOINT=... trunk build`; when unset the signup is only logged.
pub fn newsletter_endpoint() -> Option<&'static str> {
    option_env!("NEWSLETTER_ENDPOINT").filter(|url| !url.trim().is_empty())
}

// Header
pub const SCROLL_THRESHOLD: f64 = 40.0;

// Smooth scrolling
pub const HEADER_HEIGHT_VAR: &str = "--header-h";
pub const HEADER_FALLBACK_HEIGHT: f64 = 76.0;
pub const ANCHOR_MARGIN: f64 = 16.0;

// Active link
pub const HOME_PAGE: &str = "index.html";

// Reveal timings (ms) and visibility ratios
pub const HERO_ART_DELAY_MS: u32 = 200;
pub const HERO_CONTENT_DELAY_MS: u32 = 400;
pub const CARD_THRESHOLD: f64 = 0.12;
pub const GROUP_THRESHOLD: f64 = 0.1;
pub const CARD_STAGGER_MS: u32 = 100;
pub const GROUP_STAGGER_MS: u32 = 80;
pub const CARD_DURATION_MS: u32 = 600;
pub const RESOURCE_DURATION_MS: u32 = 500;
pub const GROUP_DURATION_MS: u32 = 650;

/// (value, label) pairs shown by both language selectors.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "EN"),
    ("fr", "FR"),
    ("de", "DE"),
    ("es", "ES"),
];

pub const DEFAULT_LANGUAGE: &str = "en";
