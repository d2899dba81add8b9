use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::snap::context::use_snap_scroll;

/// Overdamped spring (stiffness 80, damping 20) approximated as a bezier.
const SPRING_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
const EXIT_EASING: &str = "ease-out";
const EXIT_DURATION: f64 = 0.3;

/// One pose of a reveal block. Offsets in px, blur in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub blur: f64,
}

impl VisualState {
    const SHOWN: VisualState = VisualState { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, blur: 0.0 };

    const fn hidden(x: f64, y: f64, scale: f64, blur: f64) -> Self {
        Self { opacity: 0.0, x, y, scale, blur }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}); filter: blur({}px);",
            self.opacity, self.x, self.y, self.scale, self.blur
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPreset {
    #[default]
    FadeUp,
    FadeBlur,
    ScaleIn,
    SlideLeft,
    SlideRight,
    CascadeRight,
}

impl RevealPreset {
    pub fn hidden(self) -> VisualState {
        match self {
            RevealPreset::FadeUp => VisualState::hidden(0.0, 80.0, 1.0, 0.0),
            RevealPreset::FadeBlur => VisualState::hidden(0.0, 40.0, 1.0, 16.0),
            RevealPreset::ScaleIn => VisualState::hidden(0.0, 0.0, 0.7, 0.0),
            RevealPreset::SlideLeft => VisualState::hidden(150.0, 0.0, 1.0, 0.0),
            RevealPreset::SlideRight => VisualState::hidden(-150.0, 0.0, 1.0, 0.0),
            RevealPreset::CascadeRight => VisualState::hidden(-60.0, 20.0, 1.0, 0.0),
        }
    }

    pub fn visible(self) -> VisualState {
        VisualState::SHOWN
    }
}

/// Entrance timing in seconds. Exits always use a fixed fast transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub delay: f64,
    pub duration: f64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self { delay: 0.0, duration: 0.8 }
    }
}

pub fn is_revealed(section_index: usize, active_section: usize) -> bool {
    section_index == active_section
}

fn transition(duration: f64, easing: &str, delay: f64) -> String {
    ["opacity", "transform", "filter"]
        .iter()
        .map(|prop| format!("{} {}s {} {}s", prop, duration, easing, delay))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Inline style for a reveal block in the given state.
pub fn reveal_style(preset: RevealPreset, revealed: bool, timing: RevealTiming) -> String {
    let (pose, transition) = if revealed {
        (preset.visible(), transition(timing.duration, SPRING_EASING, timing.delay))
    } else {
        (preset.hidden(), transition(EXIT_DURATION, EXIT_EASING, 0.0))
    };
    format!("{} transition: {}; will-change: opacity, transform;", pose.css(), transition)
}

/// Delays the first reveal by a frame so the entrance transition runs on mount.
#[hook]
fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(16, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *mounted
}

#[derive(Properties, PartialEq)]
pub struct SnapRevealProps {
    pub section_index: usize,
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SnapReveal)]
pub fn snap_reveal(props: &SnapRevealProps) -> Html {
    let state = use_snap_scroll();
    let mounted = use_mounted();
    let revealed = mounted && is_revealed(props.section_index, state.active_section);
    let timing = RevealTiming { delay: props.delay, duration: props.duration };

    html! {
        <div class={props.class.clone()} style={reveal_style(props.preset, revealed, timing)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveal for blocks outside the snap sections: shows once, the first time
/// the block scrolls into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_state(|| false);

    {
        let node = node.clone();
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_seen = seen.clone();
                    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let visible = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map(|entry| entry.is_intersecting())
                                .unwrap_or(false)
                        });
                        if visible {
                            on_seen.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from(0.15));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some((obs, callback));
                        }
                        Err(_) => {
                            debug!("IntersectionObserver unavailable, revealing immediately");
                            seen.set(true);
                        }
                    }
                }

                move || {
                    if let Some((obs, _callback)) = observer {
                        obs.disconnect();
                    }
                }
            },
            (),
        );
    }

    let timing = RevealTiming { delay: props.delay, ..RevealTiming::default() };

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(props.preset, *seen, timing)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_only_for_matching_section() {
        assert!(is_revealed(2, 2));
        assert!(!is_revealed(2, 1));
        assert!(!is_revealed(0, 4));
    }

    #[test]
    fn every_preset_ends_fully_visible() {
        let presets = [
            RevealPreset::FadeUp,
            RevealPreset::FadeBlur,
            RevealPreset::ScaleIn,
            RevealPreset::SlideLeft,
            RevealPreset::SlideRight,
            RevealPreset::CascadeRight,
        ];
        for preset in presets {
            assert_eq!(preset.visible(), VisualState::SHOWN);
            assert_eq!(preset.hidden().opacity, 0.0);
            assert_ne!(preset.hidden(), preset.visible());
        }
    }

    #[test]
    fn slide_presets_come_from_opposite_sides() {
        assert_eq!(RevealPreset::SlideLeft.hidden().x, 150.0);
        assert_eq!(RevealPreset::SlideRight.hidden().x, -150.0);
        assert_eq!(RevealPreset::FadeBlur.hidden().blur, 16.0);
        assert_eq!(RevealPreset::ScaleIn.hidden().scale, 0.7);
    }

    #[test]
    fn entrance_uses_spring_and_delay() {
        let timing = RevealTiming { delay: 0.35, duration: 0.8 };
        let style = reveal_style(RevealPreset::FadeBlur, true, timing);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("blur(0px)"));
        assert!(style.contains(&format!("opacity 0.8s {} 0.35s", SPRING_EASING)));
    }

    #[test]
    fn exit_is_fast_and_ignores_delay() {
        let timing = RevealTiming { delay: 0.7, duration: 2.0 };
        let style = reveal_style(RevealPreset::FadeUp, false, timing);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate3d(0px, 80px, 0)"));
        assert!(style.contains("transform 0.3s ease-out 0s"));
        assert!(!style.contains("0.7s"));
    }
}
