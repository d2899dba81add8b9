use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::{America::Panama, Tz};

use crate::form::submit::DeliveryMode;

pub const CONTACT_EMAIL: &str = "chabadboquete@gmail.com";
pub const WHATSAPP_NUMBER: &str = "50762430666";
pub const WHATSAPP_DISPLAY: &str = "+507 6243 0666";

/// Time zone the program dates are announced in.
pub const PROGRAM_TZ: Tz = Panama;

/// Form-processing endpoint, baked in at build time. Builds without
/// FORM_ENDPOINT_URL still render; submissions then fail with the transport error.
pub fn get_form_endpoint_url() -> &'static str {
    option_env!("FORM_ENDPOINT_URL").unwrap_or("")
}

pub fn get_delivery_mode() -> DeliveryMode {
    parse_delivery_mode(option_env!("FORM_DELIVERY_MODE"))
}

fn parse_delivery_mode(raw: Option<&str>) -> DeliveryMode {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "acknowledged" => DeliveryMode::Acknowledged,
        _ => DeliveryMode::Opaque,
    }
}

fn program_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Tz> {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap_or_default();
    // Panama has no DST, so local times always map to exactly one instant
    PROGRAM_TZ
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| PROGRAM_TZ.from_utc_datetime(&naive))
}

/// First day of the program, the countdown target.
pub fn program_start() -> DateTime<Tz> {
    program_time(2026, 6, 22, 0, 0, 0)
}

/// Last second the early bird price is shown.
pub fn early_bird_deadline() -> DateTime<Tz> {
    program_time(2026, 3, 31, 23, 59, 59)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn whatsapp_link(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        _ => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};

    #[test]
    fn delivery_mode_defaults_to_opaque() {
        assert_eq!(parse_delivery_mode(None), DeliveryMode::Opaque);
        assert_eq!(parse_delivery_mode(Some("")), DeliveryMode::Opaque);
        assert_eq!(parse_delivery_mode(Some("no-cors")), DeliveryMode::Opaque);
    }

    #[test]
    fn delivery_mode_accepts_acknowledged_in_any_case() {
        assert_eq!(parse_delivery_mode(Some("acknowledged")), DeliveryMode::Acknowledged);
        assert_eq!(parse_delivery_mode(Some(" Acknowledged ")), DeliveryMode::Acknowledged);
    }

    #[test]
    fn program_start_is_midnight_in_panama() {
        let start = program_start().with_timezone(&Utc);
        // UTC-5 all year
        assert_eq!((start.year(), start.month(), start.day()), (2026, 6, 22));
        assert_eq!(start.hour(), 5);
    }

    #[test]
    fn early_bird_deadline_precedes_start() {
        assert!(early_bird_deadline() < program_start());
    }

    #[test]
    fn whatsapp_link_encodes_text() {
        assert_eq!(whatsapp_link(None), "https://wa.me/50762430666");
        assert_eq!(whatsapp_link(Some("")), "https://wa.me/50762430666");
        assert_eq!(
            whatsapp_link(Some("Hi there & hello")),
            "https://wa.me/50762430666?text=Hi%20there%20%26%20hello"
        );
    }

    #[test]
    fn mailto_uses_contact_address() {
        assert_eq!(mailto_link(), "mailto:chabadboquete@gmail.com");
    }
}
