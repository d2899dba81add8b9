use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::snap::context::SnapScrollState;
use crate::snap::tracker::{SectionExtent, SectionTracker, Viewport};

/// Labels of the side dots, one per leading snap section.
const DOT_LABELS: [&str; 4] = ["Top", "About", "Experience", "Journey"];

/// Smoothly scroll an element's top edge into view.
pub fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn measure(container: &NodeRef, sections: &[NodeRef]) -> Option<(Viewport, Vec<Option<SectionExtent>>)> {
    let container = container.cast::<HtmlElement>()?;
    let viewport = Viewport::new(container.scroll_top() as f64, container.client_height() as f64);
    let extents = sections
        .iter()
        .map(|section| {
            section
                .cast::<HtmlElement>()
                .map(|el| SectionExtent::new(el.offset_top() as f64, el.client_height() as f64))
        })
        .collect();
    Some((viewport, extents))
}

/// Target id of an in-page anchor (`href="#id"`) that was clicked, if any.
fn clicked_anchor_target(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href^=\"#\"]").ok()??;
    let id = anchor.get_attribute("href")?.trim_start_matches('#').to_string();
    (!id.is_empty()).then_some(id)
}

#[derive(Properties, PartialEq)]
pub struct SnapScrollPageProps {
    pub snap_sections: Vec<Html>,
    #[prop_or_default]
    pub normal_sections: Vec<Html>,
    /// Element ids, snap sections first then normal sections. Empty means no id.
    #[prop_or_default]
    pub section_ids: Vec<AttrValue>,
}

#[function_component(SnapScrollPage)]
pub fn snap_scroll_page(props: &SnapScrollPageProps) -> Html {
    let container = use_node_ref();
    let section_count = props.snap_sections.len();
    let section_refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        section_count,
    );
    let active = use_state(|| 0usize);
    let tracker = use_mut_ref(SectionTracker::default);

    // Section tracking: the only writer of the active section.
    {
        let container = container.clone();
        let section_refs = section_refs.clone();
        let active = active.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let recompute: Rc<dyn Fn()> = {
                    let container = container.clone();
                    Rc::new(move || {
                        let Some((viewport, extents)) = measure(&container, &section_refs) else {
                            return;
                        };
                        if let Some(index) = tracker.borrow_mut().update(viewport, extents) {
                            debug!("Active section is now {}", index);
                            active.set(index);
                        }
                    })
                };

                let on_scroll = {
                    let recompute = recompute.clone();
                    Closure::wrap(Box::new(move || recompute()) as Box<dyn FnMut()>)
                };
                let on_layout = {
                    let recompute = recompute.clone();
                    Closure::wrap(Box::new(move || recompute()) as Box<dyn FnMut()>)
                };

                let element = container.cast::<HtmlElement>();
                if let Some(element) = element.as_ref() {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if element
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                            &options,
                        )
                        .is_err()
                    {
                        warn!("Could not attach scroll listener to snap container");
                    }
                }
                let window = web_sys::window();
                if let Some(window) = window.as_ref() {
                    // Heights are only known after layout; resize and load re-measure.
                    for event in ["resize", "load"] {
                        let _ = window.add_event_listener_with_callback(event, on_layout.as_ref().unchecked_ref());
                    }
                }

                // Initial check
                recompute();

                move || {
                    if let Some(element) = element {
                        let _ = element.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                    if let Some(window) = window {
                        for event in ["resize", "load"] {
                            let _ = window.remove_event_listener_with_callback(event, on_layout.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            section_count,
        );
    }

    // In-page anchor links scroll smoothly instead of jumping.
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
                let Some(id) = clicked_anchor_target(&e) else { return };
                let target = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(&id));
                if let Some(target) = target {
                    e.prevent_default();
                    smooth_scroll_to(&target);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = document.as_ref() {
                let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );

    let scroll_to_section = {
        let section_refs = section_refs.clone();
        Callback::from(move |index: usize| {
            if let Some(element) = section_refs.get(index).and_then(|r| r.cast::<Element>()) {
                smooth_scroll_to(&element);
            }
        })
    };

    let id_for = |index: usize| -> Option<AttrValue> {
        props.section_ids.get(index).filter(|id| !id.is_empty()).cloned()
    };

    html! {
        <ContextProvider<SnapScrollState> context={SnapScrollState { active_section: *active }}>
            <style>
            {r#"
                .snap-container {
                    position: relative;
                    height: 100dvh;
                    overflow-y: auto;
                    scroll-snap-type: y proximity;
                }
                .snap-section {
                    position: relative;
                    height: 100dvh;
                    scroll-snap-align: start;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .dot-nav {
                    position: fixed;
                    right: 1.25rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: none;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .dot-nav button {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }
                .dot-nav .dot-label {
                    position: absolute;
                    right: 1.25rem;
                    padding: 0.25rem 0.5rem;
                    background: #111827;
                    color: #fff;
                    font-size: 0.75rem;
                    border-radius: 4px;
                    white-space: nowrap;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s;
                }
                .dot-nav button:hover .dot-label {
                    opacity: 1;
                }
                .dot-nav .dot {
                    display: block;
                    width: 8px;
                    height: 8px;
                    border-radius: 9999px;
                    background: #d1d5db;
                    transition: all 0.3s;
                }
                .dot-nav button:hover .dot {
                    background: #6b7280;
                }
                .dot-nav .dot.active {
                    width: 12px;
                    height: 12px;
                    background: #111827;
                }
                @media (min-width: 768px) {
                    .dot-nav {
                        display: flex;
                    }
                }
            "#}
            </style>
            <main ref={container} class="snap-container">
                { for props.snap_sections.iter().enumerate().map(|(i, section)| html! {
                    <section key={i} id={id_for(i)} ref={section_refs[i].clone()} class="snap-section">
                        { section.clone() }
                    </section>
                }) }
                { for props.normal_sections.iter().enumerate().map(|(i, section)| html! {
                    <div key={format!("normal-{}", i)} id={id_for(section_count + i)}>
                        { section.clone() }
                    </div>
                }) }
            </main>
            <nav class="dot-nav">
                { for DOT_LABELS.iter().enumerate().map(|(i, label)| {
                    let onclick = {
                        let scroll_to_section = scroll_to_section.clone();
                        Callback::from(move |_: MouseEvent| scroll_to_section.emit(i))
                    };
                    html! {
                        <button key={*label} {onclick} aria-label={format!("Go to {}", label)}>
                            <span class="dot-label">{*label}</span>
                            <span class={classes!("dot", (i == *active).then_some("active"))}></span>
                        </button>
                    }
                }) }
            </nav>
        </ContextProvider<SnapScrollState>>
    }
}
