use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND: &str = "Nexol";
pub const BRAND_ACCENT: &str = "Media";

pub const BOOKING_URL: &str = "https://cal.com/niteshbandekar/15min";
pub const STRATEGY_CALL_URL: &str = "https://cal.com/niteshbandekar/30min";
pub const CONTACT_PHONE: &str = "+917058025578";
pub const CONTACT_PHONE_DISPLAY: &str = "+91 705 802 5578";
pub const CONTACT_EMAIL: &str = "info@nexolmedia.com";
pub const CONTACT_EMAIL_SUBJECT: &str = "Strategy call enquiry";

/// Fraction of a block that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Fires 60px before the block's bottom edge clears the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: f64 = 1800.0;
pub const COUNTER_EASE_EXPONENT: i32 = 3;

pub const MARQUEE_SPEED_PX_PER_SEC: f64 = 40.0;
pub const MARQUEE_COPIES: usize = 2;
pub const MARQUEE_RESIZE_DEBOUNCE_MS: u32 = 150;

/// Scroll distance after which the nav switches to its condensed look.
pub const NAV_SCROLLED_OFFSET: i32 = 40;

pub fn mailto_link() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(CONTACT_EMAIL_SUBJECT)
    )
}

pub fn tel_link() -> String {
    format!("tel:{}", CONTACT_PHONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link(),
            "mailto:info@nexolmedia.com?subject=Strategy%20call%20enquiry"
        );
    }

    #[test]
    fn thresholds_are_fractions() {
        for t in [REVEAL_THRESHOLD, COUNTER_THRESHOLD] {
            assert!(t > 0.0 && t <= 1.0);
        }
        assert!(MARQUEE_COPIES >= 2);
    }
}
