use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::config;

pub const EARLY_BIRD_PRICE: &str = "$4,000";
pub const STANDARD_PRICE: &str = "$4,200";

pub fn is_early_bird(now: DateTime<Utc>) -> bool {
    now <= config::early_bird_deadline().with_timezone(&Utc)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramPrice {
    EarlyBird,
    Standard,
}

impl ProgramPrice {
    pub fn at(now: DateTime<Utc>) -> Self {
        if is_early_bird(now) {
            ProgramPrice::EarlyBird
        } else {
            ProgramPrice::Standard
        }
    }

    pub fn amount(self) -> &'static str {
        match self {
            ProgramPrice::EarlyBird => EARLY_BIRD_PRICE,
            ProgramPrice::Standard => STANDARD_PRICE,
        }
    }
}

#[function_component(EarlyBirdPricingBar)]
pub fn early_bird_pricing_bar() -> Html {
    let price = ProgramPrice::at(Utc::now());

    html! {
        <div class="price-block">
            <p class="bar-label">{"Price"}</p>
            if price == ProgramPrice::EarlyBird {
                <>
                    <p class="price-was"><span class="strike">{STANDARD_PRICE}</span></p>
                    <p class="price-now">
                        {EARLY_BIRD_PRICE}{" "}
                        <span class="early-bird-tag">{"Early Bird"}</span>
                    </p>
                    <p class="price-note">{"Before Mar 31 · Airfare not included"}</p>
                </>
            } else {
                <>
                    <p class="price-now">{STANDARD_PRICE}</p>
                    <p class="price-note">{"Airfare not included"}</p>
                </>
            }
        </div>
    }
}

#[function_component(EarlyBirdPricingForm)]
pub fn early_bird_pricing_form() -> Html {
    let price = ProgramPrice::at(Utc::now());

    html! {
        <div class="info-card">
            <div class="cost-row">
                <span class="cost-label">{"Program Cost"}</span>
                <span class="cost-amount">{price.amount()}</span>
            </div>
            {
                match price {
                    ProgramPrice::EarlyBird => html! {
                        <p class="info-note">
                            {"Early bird pricing: "}<span class="strike">{STANDARD_PRICE}</span>{" until March 31, 2026"}
                        </p>
                    },
                    ProgramPrice::Standard => html! {
                        <p class="info-note">{"Standard registration"}</p>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn early_bird_until_end_of_march_panama_time() {
        // 2026-03-31 23:59:59 in Panama is 2026-04-01 04:59:59 UTC
        let last = Utc.with_ymd_and_hms(2026, 4, 1, 4, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 4, 1, 5, 0, 0).unwrap();
        assert!(is_early_bird(last));
        assert!(!is_early_bird(after));
    }

    #[test]
    fn price_follows_window() {
        let january = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let may = Utc.with_ymd_and_hms(2026, 5, 15, 12, 0, 0).unwrap();
        assert_eq!(ProgramPrice::at(january).amount(), "$4,000");
        assert_eq!(ProgramPrice::at(may).amount(), "$4,200");
    }
}
