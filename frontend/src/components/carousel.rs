use web_sys::{Event, HtmlElement, PointerEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Drag distance (px) that moves to the neighbouring card.
const SWIPE_DISTANCE: f64 = 50.0;
/// Release speed (px/s) that moves to the neighbouring card.
const SWIPE_VELOCITY: f64 = 500.0;
const DRAG_ELASTIC: f64 = 0.15;

/// Track translation that centres card `index` in the container.
pub fn carousel_offset(index: usize, card_width: f64, gap: f64, container_width: f64) -> f64 {
    let card_center = index as f64 * (card_width + gap) + card_width / 2.0;
    -(card_center - container_width / 2.0)
}

pub fn clamp_index(index: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.clamp(0, count as isize - 1) as usize
}

/// Card to settle on after a drag. A swipe right wins over a swipe left when
/// distance and velocity disagree.
pub fn index_after_drag(current: usize, offset: f64, velocity: f64, count: usize) -> usize {
    let mut next = current as isize;
    if offset < -SWIPE_DISTANCE || velocity < -SWIPE_VELOCITY {
        next = current as isize + 1;
    }
    if offset > SWIPE_DISTANCE || velocity > SWIPE_VELOCITY {
        next = current as isize - 1;
    }
    clamp_index(next, count)
}

/// Position while dragging; past the bounds only a fraction of the motion applies.
pub fn elastic_position(x: f64, min: f64, max: f64) -> f64 {
    if x > max {
        max + (x - max) * DRAG_ELASTIC
    } else if x < min {
        min + (x - min) * DRAG_ELASTIC
    } else {
        x
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    start_x: f64,
    last_x: f64,
    last_t: f64,
    velocity: f64,
}

#[derive(Properties, PartialEq)]
pub struct HorizontalCarouselProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(340.0)]
    pub card_width: f64,
    #[prop_or(24.0)]
    pub gap: f64,
}

#[function_component(HorizontalCarousel)]
pub fn horizontal_carousel(props: &HorizontalCarouselProps) -> Html {
    let viewport = use_node_ref();
    let current = use_state(|| 0usize);
    let container_width = use_state(|| 0.0f64);
    let drag = use_state(|| None::<Drag>);
    let count = props.children.len();

    let measure = {
        let viewport = viewport.clone();
        let container_width = container_width.clone();
        move || {
            if let Some(el) = viewport.cast::<HtmlElement>() {
                container_width.set(el.client_width() as f64);
            }
        }
    };
    {
        let measure = measure.clone();
        use_effect_with_deps(
            move |_| {
                measure();
                || ()
            },
            (),
        );
    }
    use_event_with_window("resize", move |_: Event| measure());

    let snap_to = {
        let current = current.clone();
        Callback::from(move |index: isize| current.set(clamp_index(index, count)))
    };

    let onpointerdown = {
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            let x = e.client_x() as f64;
            drag.set(Some(Drag { start_x: x, last_x: x, last_t: e.time_stamp(), velocity: 0.0 }));
        })
    };
    let onpointermove = {
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(state) = *drag {
                let x = e.client_x() as f64;
                let dt = e.time_stamp() - state.last_t;
                let velocity = if dt > 0.0 { (x - state.last_x) / (dt / 1000.0) } else { state.velocity };
                drag.set(Some(Drag { last_x: x, last_t: e.time_stamp(), velocity, ..state }));
            }
        })
    };
    let end_drag = {
        let drag = drag.clone();
        let current = current.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(state) = *drag {
                current.set(index_after_drag(*current, state.last_x - state.start_x, state.velocity, count));
                drag.set(None);
            }
        })
    };

    let settled = carousel_offset(*current, props.card_width, props.gap, *container_width);
    let track_width = count as f64 * props.card_width + count.saturating_sub(1) as f64 * props.gap;
    let min_drag = -(track_width - *container_width);
    let (x, transition) = match *drag {
        Some(state) => (elastic_position(settled + state.last_x - state.start_x, min_drag, 0.0), "none"),
        None => (settled, "transform 0.5s cubic-bezier(0.25, 1, 0.5, 1)"),
    };
    let track_style = format!(
        "transform: translateX({}px); gap: {}px; transition: {};",
        x, props.gap, transition
    );
    let card_style = format!("width: {}px;", props.card_width);

    let prev = {
        let snap_to = snap_to.clone();
        let index = *current as isize;
        Callback::from(move |_: MouseEvent| snap_to.emit(index - 1))
    };
    let next = {
        let snap_to = snap_to.clone();
        let index = *current as isize;
        Callback::from(move |_: MouseEvent| snap_to.emit(index + 1))
    };

    html! {
        <div ref={viewport} class="carousel">
            <style>
            {r#"
                .carousel { width: 100%; overflow: hidden; touch-action: pan-y; }
                .carousel-track { display: flex; cursor: grab; user-select: none; }
                .carousel-track:active { cursor: grabbing; }
                .carousel-card { flex-shrink: 0; }
                .carousel-controls { display: flex; align-items: center; justify-content: center; gap: 1rem; margin-top: 2rem; }
                .carousel-arrow {
                    display: none;
                    width: 36px; height: 36px;
                    align-items: center; justify-content: center;
                    border-radius: 9999px; border: 1px solid #e5e7eb;
                    background: none; color: #6b7280; cursor: pointer;
                }
                .carousel-arrow:disabled { opacity: 0.3; cursor: not-allowed; }
                .carousel-dots { display: flex; gap: 0.5rem; }
                .carousel-dot { height: 8px; width: 8px; border-radius: 9999px; border: none; background: #d1d5db; cursor: pointer; transition: all 0.3s; }
                .carousel-dot.active { width: 24px; background: #111827; }
                @media (min-width: 640px) { .carousel-arrow { display: flex; } }
            "#}
            </style>
            <div
                class="carousel-track"
                style={track_style}
                {onpointerdown}
                {onpointermove}
                onpointerup={end_drag.clone()}
                onpointercancel={end_drag.clone()}
                onpointerleave={end_drag}
            >
                { for props.children.iter().map(|child| html! {
                    <div class="carousel-card" style={card_style.clone()}>{child}</div>
                }) }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={prev} disabled={*current == 0} aria-label="Previous">{"‹"}</button>
                <div class="carousel-dots">
                    { for (0..count).map(|i| {
                        let snap_to = snap_to.clone();
                        html! {
                            <button
                                key={i}
                                class={classes!("carousel-dot", (i == *current).then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| snap_to.emit(i as isize))}
                                aria-label={format!("Go to card {}", i + 1)}
                            />
                        }
                    }) }
                </div>
                <button class="carousel-arrow" onclick={next} disabled={*current + 1 >= count} aria-label="Next">{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_centres_the_card() {
        // 340px cards, 24px gap, 1000px viewport: card 0 centre at 170 -> shift by 330
        assert_eq!(carousel_offset(0, 340.0, 24.0, 1000.0), 330.0);
        assert_eq!(carousel_offset(1, 340.0, 24.0, 1000.0), 330.0 - 364.0);
    }

    #[test]
    fn index_is_clamped() {
        assert_eq!(clamp_index(-1, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(9, 4), 3);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn drag_distance_or_speed_changes_card() {
        assert_eq!(index_after_drag(1, -80.0, 0.0, 4), 2);
        assert_eq!(index_after_drag(1, 80.0, 0.0, 4), 0);
        assert_eq!(index_after_drag(1, -10.0, -900.0, 4), 2);
        assert_eq!(index_after_drag(1, 10.0, 900.0, 4), 0);
        assert_eq!(index_after_drag(1, 20.0, 100.0, 4), 1);
    }

    #[test]
    fn drag_cannot_leave_the_ends() {
        assert_eq!(index_after_drag(0, 200.0, 0.0, 4), 0);
        assert_eq!(index_after_drag(3, -200.0, 0.0, 4), 3);
    }

    #[test]
    fn elastic_beyond_bounds() {
        assert_eq!(elastic_position(-50.0, -100.0, 0.0), -50.0);
        assert_eq!(elastic_position(100.0, -100.0, 0.0), 15.0);
        assert_eq!(elastic_position(-200.0, -100.0, 0.0), -115.0);
    }
}
