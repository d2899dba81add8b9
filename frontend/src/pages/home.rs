use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::carousel::HorizontalCarousel;
use crate::components::countdown::CountdownTimer;
use crate::components::gallery::GalleryCard;
use crate::components::pricing::EarlyBirdPricingBar;
use crate::components::video::AutoPlayVideo;
use crate::config;
use crate::form::application::ApplicationForm;
use crate::snap::page::SnapScrollPage;
use crate::snap::reveal::{RevealPreset, ScrollReveal, SnapReveal};

struct Highlight {
    label: &'static str,
    icon: &'static str,
}

static HIGHLIGHTS: [Highlight; 6] = [
    Highlight { label: "Daily structure", icon: "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" },
    Highlight { label: "Limited phones", icon: "M18.364 18.364A9 9 0 005.636 5.636m12.728 12.728A9 9 0 015.636 5.636m12.728 12.728L5.636 5.636" },
    Highlight { label: "Morning workouts", icon: "M13 10V3L4 14h7v7l9-11h-7z" },
    Highlight { label: "Farbrengens & hachlatos", icon: "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z" },
    Highlight { label: "Outdoor challenges", icon: "M3 21l6-6m0 0l4-4m-4 4l-4-4m4 4l6-6m0 0l6 6M9 3l3 3m0 0l3-3" },
    Highlight { label: "Small group", icon: "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z" },
];

/// Files under /gallery, shown in this order.
static GALLERY: [(&str, &str); 5] = [
    ("summit.jpg", "Volcan Baru Summit"),
    ("bocas.jpg", "Bocas del Toro"),
    ("farbrengen.jpg", "Farbrengen Night"),
    ("adventure.jpg", "Adventures"),
    ("rafting.mp4", "Rafting"),
];

struct Location {
    name: &'static str,
    tag: &'static str,
    description: &'static str,
    preset: RevealPreset,
}

static LOCATIONS: [Location; 3] = [
    Location {
        name: "Boquete",
        tag: "Home Base",
        description: "Mountains, coffee farms, cloud forest, hot springs.",
        preset: RevealPreset::SlideRight,
    },
    Location {
        name: "Bocas del Toro",
        tag: "3-Day Trip",
        description: "Caribbean islands, snorkeling, beaches.",
        preset: RevealPreset::ScaleIn,
    },
    Location {
        name: "Panama City",
        tag: "Day Trip",
        description: "Casco Viejo, Panama Canal.",
        preset: RevealPreset::SlideLeft,
    },
];

#[function_component(HeroContent)]
fn hero_content() -> Html {
    html! {
        <>
            <AutoPlayVideo src="/hero-video.mp4" class={classes!("hero-video")} />
            <div class="hero-overlay" />
            <div class="hero-inner">
                <SnapReveal section_index={0} preset={RevealPreset::FadeBlur}>
                    <p class="hero-kicker">{"Summer 5786"}</p>
                </SnapReveal>
                <SnapReveal section_index={0} preset={RevealPreset::ScaleIn} delay={0.15}>
                    <h1 class="hero-title">{"Yeshivas Kayitz"}<br /><span>{"Panama"}</span></h1>
                </SnapReveal>
                <SnapReveal section_index={0} preset={RevealPreset::FadeBlur} delay={0.35}>
                    <p class="hero-lead">{"Three weeks of growth, adventure & real connection."}</p>
                    <p class="hero-dates">{"June 22 - July 14, 2026"}</p>
                </SnapReveal>
                <SnapReveal section_index={0} preset={RevealPreset::FadeUp} delay={0.45}>
                    <CountdownTimer />
                </SnapReveal>
                <SnapReveal section_index={0} preset={RevealPreset::FadeUp} delay={0.55}>
                    <div class="hero-actions">
                        <a href="#apply" class="btn-light">{"Apply Now"}</a>
                        <a href="#about" class="btn-ghost">{"Learn More"}</a>
                    </div>
                </SnapReveal>
                <SnapReveal section_index={0} preset={RevealPreset::FadeUp} delay={0.7}>
                    <div class="scroll-hint">{"Scroll to explore"}</div>
                </SnapReveal>
            </div>
        </>
    }
}

#[function_component(AboutContent)]
fn about_content() -> Html {
    html! {
        <div class="section-inner narrow">
            <SnapReveal section_index={1} preset={RevealPreset::FadeBlur}>
                <p class="kicker">{"What We're About"}</p>
                <h2>{"Purpose. Growth. Adventure."}</h2>
            </SnapReveal>
            <SnapReveal section_index={1} preset={RevealPreset::FadeBlur} delay={0.15}>
                <p class="lead">
                    {"A summer program in Panama for bochurim who want something real: daily structure, \
                      morning workouts, learning maamer V'Ata Tetzave, farbrengens that lead to actual \
                      hachlatos, and serious outdoor adventures. No fluff, just a focused and meaningful few weeks."}
                </p>
            </SnapReveal>
            <SnapReveal section_index={1} preset={RevealPreset::FadeUp} delay={0.3}>
                <div class="highlights">
                    { for HIGHLIGHTS.iter().map(|h| html! {
                        <span key={h.label} class="highlight">
                            <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d={h.icon} />
                            </svg>
                            {h.label}
                        </span>
                    }) }
                </div>
            </SnapReveal>
            <SnapReveal section_index={1} preset={RevealPreset::FadeUp} delay={0.45}>
                <p class="goal">
                    {"The goal? A bochur comes home more grounded, more confident, and proud of what he accomplished."}
                </p>
            </SnapReveal>
        </div>
    }
}

#[function_component(ExperienceContent)]
fn experience_content() -> Html {
    html! {
        <div class="section-inner wide">
            <SnapReveal section_index={2} preset={RevealPreset::FadeBlur}>
                <p class="kicker">{"Last Summer"}</p>
                <h2>{"The Experience"}</h2>
            </SnapReveal>
            <SnapReveal section_index={2} preset={RevealPreset::CascadeRight} delay={0.2}>
                <HorizontalCarousel>
                    { for GALLERY.iter().enumerate().map(|(index, (file, caption))| html! {
                        <GalleryCard
                            key={*file}
                            file={*file}
                            caption={Some(AttrValue::from(*caption))}
                            {index}
                        />
                    }) }
                </HorizontalCarousel>
            </SnapReveal>
        </div>
    }
}

#[function_component(JourneyContent)]
fn journey_content() -> Html {
    html! {
        <div class="section-inner wide">
            <SnapReveal section_index={3} preset={RevealPreset::FadeBlur}>
                <p class="kicker">{"The Journey"}</p>
                <h2>{"Where We Go"}</h2>
            </SnapReveal>
            <div class="locations">
                { for LOCATIONS.iter().enumerate().map(|(i, loc)| html! {
                    <SnapReveal key={loc.name} section_index={3} preset={loc.preset} delay={0.12 + i as f64 * 0.12}>
                        <div class="location-card">
                            <div class="location-banner"><span class="location-tag">{loc.tag}</span></div>
                            <div class="location-body">
                                <h3>{loc.name}</h3>
                                <p>{loc.description}</p>
                            </div>
                        </div>
                    </SnapReveal>
                }) }
            </div>
            <SnapReveal section_index={3} preset={RevealPreset::FadeUp} delay={0.5}>
                <div class="journey-bar">
                    <div>
                        <p class="bar-label">{"Dates"}</p>
                        <p class="bar-value">{"June 22 - July 14, 2026"}</p>
                    </div>
                    <EarlyBirdPricingBar />
                    <a href="#apply" class="btn-dark">{"Apply Now"}</a>
                </div>
            </SnapReveal>
        </div>
    }
}

#[function_component(ApplyContent)]
fn apply_content() -> Html {
    html! {
        <div class="apply-scroll">
            <div class="section-inner narrow">
                <SnapReveal section_index={4} preset={RevealPreset::FadeBlur}>
                    <p class="kicker">{"Join Us"}</p>
                    <h2>{"Apply Now"}</h2>
                    <p class="lead">{"Fill this out and we'll get back to you within a few days."}</p>
                </SnapReveal>
                <SnapReveal section_index={4} preset={RevealPreset::FadeUp} delay={0.15}>
                    <div class="form-card">
                        <ApplicationForm />
                    </div>
                </SnapReveal>
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section class="contact">
            <ScrollReveal>
                <p class="kicker">{"Get in Touch"}</p>
                <h2>{"Contact Us"}</h2>
            </ScrollReveal>
            <ScrollReveal delay={0.1}>
                <div class="contact-cards">
                    <a href={config::mailto_link()} class="contact-card">
                        <p class="contact-kind">{"Email"}</p>
                        <p class="contact-value">{config::CONTACT_EMAIL}</p>
                    </a>
                    <a href={config::whatsapp_link(None)} target="_blank" rel="noopener noreferrer" class="contact-card">
                        <p class="contact-kind">{"WhatsApp"}</p>
                        <p class="contact-value">{config::WHATSAPP_DISPLAY}</p>
                    </a>
                </div>
            </ScrollReveal>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = Utc::now().with_timezone(&config::PROGRAM_TZ).year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {} Yeshivas Kayitz Panama. All rights reserved.", year)}</p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let snap_sections = vec![
        html! { <HeroContent /> },
        html! { <AboutContent /> },
        html! { <ExperienceContent /> },
        html! { <JourneyContent /> },
        html! { <ApplyContent /> },
    ];
    let normal_sections = vec![html! { <ContactSection /> }, html! { <Footer /> }];
    let section_ids = ["", "about", "experience", "journey", "apply", "", ""]
        .into_iter()
        .map(AttrValue::from)
        .collect::<Vec<_>>();

    html! {
        <>
            <style>
            {r#"
                .hero-video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .hero-overlay {
                    position: absolute; inset: 0;
                    background: linear-gradient(135deg, rgba(6, 95, 70, 0.9), rgba(15, 118, 110, 0.85), rgba(7, 89, 133, 0.9));
                }
                .hero-inner { position: relative; z-index: 10; text-align: center; padding: 0 1.5rem; max-width: 56rem; margin: 0 auto; }
                .hero-kicker { font-size: 0.875rem; letter-spacing: 0.3em; text-transform: uppercase; color: rgba(255, 255, 255, 0.7); margin-bottom: 1.5rem; }
                .hero-title { font-size: clamp(2.25rem, 8vw, 6rem); font-weight: 700; color: #fff; line-height: 1.05; margin-bottom: 1.5rem; }
                .hero-title span { color: rgba(255, 255, 255, 0.6); }
                .hero-lead { font-size: 1.25rem; color: rgba(255, 255, 255, 0.8); margin-bottom: 0.75rem; }
                .hero-dates { color: rgba(255, 255, 255, 0.5); margin-bottom: 2rem; }
                .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 2rem; }
                .btn-light, .btn-ghost, .btn-dark {
                    display: inline-flex; align-items: center; justify-content: center;
                    padding: 1rem 2rem; border-radius: 0.5rem; font-weight: 500; text-decoration: none; transition: all 0.2s;
                }
                .btn-light { background: #fff; color: #111827; }
                .btn-ghost { border: 1px solid rgba(255, 255, 255, 0.3); color: #fff; }
                .btn-dark { background: #111827; color: #fff; padding: 0.75rem 1.5rem; }
                .scroll-hint { margin-top: 3.5rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.5); }
                .section-inner { margin: 0 auto; padding: 0 1.5rem; width: 100%; text-align: center; }
                .section-inner.narrow { max-width: 48rem; }
                .section-inner.wide { max-width: 64rem; }
                .section-inner h2, .contact h2 { font-size: clamp(1.5rem, 4vw, 2.25rem); font-weight: 700; color: #111827; margin-bottom: 1.5rem; }
                .kicker { font-size: 0.875rem; letter-spacing: 0.2em; text-transform: uppercase; color: #9ca3af; margin-bottom: 0.75rem; }
                .lead { color: #6b7280; font-size: 1.125rem; line-height: 1.7; margin-bottom: 2rem; }
                .goal { color: #9ca3af; font-style: italic; }
                .highlights { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2rem; }
                .highlight {
                    display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem;
                    background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 9999px; font-size: 0.875rem; color: #4b5563;
                }
                .highlight svg { width: 16px; height: 16px; color: #059669; }
                .gallery-card { position: relative; aspect-ratio: 3 / 4; border-radius: 1rem; overflow: hidden; background: linear-gradient(135deg, #f3f4f6, #e5e7eb); }
                .gallery-image, .gallery-video video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 1; }
                .gallery-placeholder { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #d1d5db; }
                .gallery-placeholder svg { width: 48px; height: 48px; }
                .gallery-caption, .video-caption {
                    position: absolute; bottom: 0; left: 0; right: 0; z-index: 2; padding: 3rem 1rem 1rem; text-align: left;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent); color: #fff;
                }
                .video-caption { pointer-events: none; }
                .locations { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2.5rem; }
                .location-card { height: 100%; background: #fff; border: 1px solid #f3f4f6; border-radius: 1rem; overflow: hidden; text-align: left; }
                .location-banner { position: relative; height: 7rem; background: linear-gradient(135deg, #ecfdf5, #ccfbf1); }
                .location-tag { position: absolute; top: 0.75rem; left: 0.75rem; background: rgba(255, 255, 255, 0.9); font-size: 11px; color: #4b5563; padding: 0.125rem 0.5rem; border-radius: 9999px; }
                .location-body { padding: 1rem; }
                .location-body h3 { font-weight: 600; color: #111827; }
                .location-body p { font-size: 0.875rem; color: #6b7280; }
                .journey-bar {
                    display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem;
                    background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 1rem; padding: 1.5rem; text-align: left;
                }
                .bar-label { font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: #9ca3af; }
                .bar-value { font-weight: 600; color: #111827; }
                .price-was { font-size: 0.875rem; color: #9ca3af; }
                .price-now { font-size: 1.5rem; font-weight: 700; color: #111827; }
                .early-bird-tag { color: #059669; font-size: 0.875rem; font-weight: 500; }
                .price-note { font-size: 0.75rem; color: #9ca3af; }
                .apply-scroll { width: 100%; height: 100%; overflow-y: auto; padding: 4rem 0; }
                .form-card { background: #fff; border: 1px solid #f3f4f6; border-radius: 1rem; padding: 2.5rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); text-align: left; }
                .contact { padding: 6rem 1.5rem; background: #f9fafb; text-align: center; }
                .contact-cards { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; max-width: 32rem; margin: 0 auto; }
                .contact-card { flex: 1; padding: 1rem 1.5rem; background: #fff; border: 1px solid #f3f4f6; border-radius: 0.75rem; text-decoration: none; text-align: left; }
                .contact-kind { font-size: 0.75rem; color: #9ca3af; }
                .contact-value { font-size: 0.875rem; color: #374151; font-weight: 500; }
                .site-footer { padding: 2rem 1.5rem; border-top: 1px solid #f3f4f6; text-align: center; font-size: 0.875rem; color: #9ca3af; }
                @media (max-width: 640px) {
                    .locations { gap: 0.5rem; }
                    .location-banner { height: 5rem; }
                    .location-body { padding: 0.625rem; }
                    .location-body p { font-size: 10px; }
                    .form-card { padding: 1.5rem; }
                }
            "#}
            </style>
            <SnapScrollPage {snap_sections} {normal_sections} {section_ids} />
        </>
    }
}
