use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

const TICK_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Remaining time until `target`, all zero once it has passed.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total_ms = (target - now).num_milliseconds();
        if total_ms <= 0 {
            return Self::default();
        }
        let total_secs = total_ms / 1000;
        Self {
            total_ms,
            days: total_secs / 86_400,
            hours: (total_secs / 3_600) % 24,
            minutes: (total_secs / 60) % 60,
            seconds: total_secs % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        self.total_ms <= 0
    }
}

fn time_left_now() -> TimeLeft {
    TimeLeft::until(config::program_start().with_timezone(&Utc), Utc::now())
}

#[derive(Properties, PartialEq)]
struct TimeBlockProps {
    value: i64,
    label: &'static str,
}

#[function_component(TimeBlock)]
fn time_block(props: &TimeBlockProps) -> Html {
    html! {
        <div class="time-block">
            <div class="time-value">{format!("{:02}", props.value)}</div>
            <div class="time-label">{props.label}</div>
        </div>
    }
}

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let time_left = use_state(time_left_now);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                // Recomputed from the clock every tick, so skipped ticks never drift
                let interval = Interval::new(TICK_MS, move || time_left.set(time_left_now()));
                move || drop(interval)
            },
            (),
        );
    }

    if time_left.is_over() {
        return html! {};
    }

    html! {
        <div class="countdown">
            <style>
            {r#"
                .countdown {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .countdown .sep {
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 1.5rem;
                    font-weight: 300;
                }
                .time-block {
                    text-align: center;
                }
                .time-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    font-variant-numeric: tabular-nums;
                    line-height: 1;
                }
                .time-label {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.5);
                    margin-top: 0.25rem;
                }
                @media (max-width: 640px) {
                    .time-value { font-size: 1.5rem; }
                    .time-label { font-size: 9px; }
                }
            "#}
            </style>
            <TimeBlock value={time_left.days} label="Days" />
            <span class="sep">{":"}</span>
            <TimeBlock value={time_left.hours} label="Hours" />
            <span class="sep">{":"}</span>
            <TimeBlock value={time_left.minutes} label="Min" />
            <span class="sep">{":"}</span>
            <TimeBlock value={time_left.seconds} label="Sec" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 22, 5, 0, 0).unwrap()
    }

    #[test]
    fn splits_remaining_time() {
        let now = target() - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
        let left = TimeLeft::until(target(), now);
        assert_eq!((left.days, left.hours, left.minutes, left.seconds), (3, 4, 5, 6));
        assert!(!left.is_over());
    }

    #[test]
    fn clamps_to_zero_after_target() {
        for past in [Duration::zero(), Duration::seconds(1), Duration::days(400)] {
            let left = TimeLeft::until(target(), target() + past);
            assert_eq!(left, TimeLeft::default());
            assert!(left.is_over());
        }
    }

    #[test]
    fn sub_second_remainder_shows_zero_seconds() {
        let left = TimeLeft::until(target(), target() - Duration::milliseconds(400));
        assert_eq!(left.total_ms, 400);
        assert_eq!(left.seconds, 0);
        assert!(!left.is_over());
    }

    #[test]
    fn consecutive_ticks_differ_by_one_second() {
        let start = target() - Duration::hours(1);
        let mut previous = TimeLeft::until(target(), start);
        for tick in 1..=120 {
            let current = TimeLeft::until(target(), start + Duration::seconds(tick));
            assert_eq!(previous.total_ms - current.total_ms, 1_000);
            previous = current;
        }
        assert_eq!((previous.minutes, previous.seconds), (58, 0));
    }
}
