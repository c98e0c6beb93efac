use chrono::Datelike;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::contact::ContactForm;
use crate::effects::reveal::{reveal_class, stagger_style, use_reveal};
use crate::effects::scroll::{
    back_to_top_visible, document_progress, hero_height, parallax_offset, scroll_to_section, smooth_scroll_to,
    use_scroll_y, use_viewport_width,
};
use crate::newsletter::NewsletterForm;

#[derive(Clone, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

const fn card(icon: &'static str, title: &'static str, text: &'static str) -> Card {
    Card { icon, title, text }
}

const FEATURES: &[Card] = &[
    card("fas fa-gem", "Premium Materials", "Hand-picked stone, timber and textiles from trusted makers."),
    card("fas fa-ruler-combined", "Bespoke Design", "Every layout drawn around how you actually live."),
    card("fas fa-clock", "On-Time Delivery", "Clear schedules and a single point of contact."),
];

const SERVICES: &[Card] = &[
    card("fas fa-couch", "Interior Design", "Complete concepts from mood board to final styling."),
    card("fas fa-hammer", "Renovation", "Kitchens, baths and full-home remodels."),
    card("fas fa-lightbulb", "Lighting Design", "Layered lighting plans for every room."),
    card("fas fa-leaf", "Sustainable Living", "Low-impact materials and efficient fittings."),
];

const COLLECTIONS: &[Card] = &[
    card("/assets/collections/modern.jpg", "Modern Minimal", "Clean lines, calm palettes."),
    card("/assets/collections/heritage.jpg", "Indian Heritage", "Carved wood, brass and handloom."),
    card("/assets/collections/coastal.jpg", "Coastal Retreat", "Light, airy and relaxed."),
];

#[function_component(ScrollProgress)]
fn scroll_progress() -> Html {
    // Re-render on scroll, then measure the document.
    let _scroll_y = use_scroll_y();
    let width = format!("width: {}%;", document_progress());
    html! { <div class="scroll-progress" style={width}></div> }
}

#[function_component(BackToTop)]
fn back_to_top() -> Html {
    let scroll_y = use_scroll_y();
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("back-to-top", back_to_top_visible(scroll_y).then_some("show"))}
            aria-label="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let scroll_y = use_scroll_y();
    let width = use_viewport_width();
    let hero_ref = use_node_ref();
    let offset = use_mut_ref(|| 0.0_f64);

    let section_height = hero_ref
        .cast::<HtmlElement>()
        .map(|el| el.offset_height() as f64)
        .unwrap_or(f64::MAX);
    if let Some(next) = parallax_offset(scroll_y, section_height) {
        *offset.borrow_mut() = next;
    }
    let background = format!("transform: translateY({}px);", *offset.borrow());

    let on_indicator = Callback::from(|_: MouseEvent| {
        scroll_to_section("about");
    });
    let on_cta = Callback::from(|e: MouseEvent| {
        if scroll_to_section("contact") {
            e.prevent_default();
        }
    });

    html! {
        <section id="home" class="hero-section" ref={hero_ref} style={format!("height: {};", hero_height(width))}>
            <div class="hero-background" style={background}></div>
            <div class="hero-content text-center">
                <h1 class="hero-title">{"Luxe Living"}</h1>
                <p class="hero-subtitle">{"Interiors crafted for the way you live"}</p>
                <a href="#contact" class="btn btn-primary btn-lg" onclick={on_cta}>{"Start Your Project"}</a>
            </div>
            <div class="scroll-indicator" onclick={on_indicator}>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: &'static str,
    subtitle: &'static str,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="text-center mb-5">
            <h2 class={reveal_class("section-title", revealed)}>{ props.title }</h2>
            <p class={reveal_class("section-subtitle", revealed)}>{ props.subtitle }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardGridProps {
    cards: &'static [Card],
    card_class: &'static str,
    stagger_ms: u32,
}

/// Icon cards that fade in one after another once the grid is visible.
#[function_component(CardGrid)]
fn card_grid(props: &CardGridProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="row g-4">
            { for props.cards.iter().enumerate().map(|(index, card)| html! {
                <div class="col-md-6 col-lg-3">
                    <div
                        class={reveal_class(props.card_class, revealed)}
                        style={stagger_style(revealed, index, props.stagger_ms)}
                        tabindex="0"
                    >
                        <i class={card.icon}></i>
                        <h3>{ card.title }</h3>
                        <p>{ card.text }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CollectionCardProps {
    card: Card,
    index: usize,
    revealed: bool,
}

#[function_component(CollectionCard)]
fn collection_card(props: &CollectionCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered && props.revealed {
        "opacity: 1; transform: translateY(-5px) scale(1.02);".to_string()
    } else {
        stagger_style(props.revealed, props.index, config::COLLECTION_STAGGER_MS)
    };

    html! {
        <div class="col-md-4">
            <div
                class={reveal_class("collection-card", props.revealed)}
                {style}
                tabindex="0"
                {onmouseenter}
                {onmouseleave}
            >
                <img src={props.card.icon} alt={props.card.title} loading="lazy" />
                <div class="collection-overlay">
                    <h3>{ props.card.title }</h3>
                    <p>{ props.card.text }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Collections)]
fn collections() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="row g-4">
            { for COLLECTIONS.iter().enumerate().map(|(index, card)| html! {
                <CollectionCard card={card.clone()} index={index} revealed={revealed} />
            }) }
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer py-5">
            <div class="container">
                <div class="row g-4">
                    <div class="col-lg-6">
                        <h4>{"Luxe Living"}</h4>
                        <p>{"Design studio and renovation partner for homes across India."}</p>
                    </div>
                    <div class="col-lg-6">
                        <h5>{"Stay inspired"}</h5>
                        <p>{"Monthly ideas, new collections and studio news."}</p>
                        <NewsletterForm />
                    </div>
                </div>
                <p class="text-center mt-4 mb-0">{ format!("© {} Luxe Living. All rights reserved.", year) }</p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <ScrollProgress />
            <Hero />

            <section id="about" class="py-5">
                <div class="container">
                    <SectionHeading title="Why Luxe Living" subtitle="Design-led, detail-obsessed, built to last." />
                    <CardGrid cards={FEATURES} card_class="feature-card" stagger_ms={config::CARD_STAGGER_MS} />
                </div>
            </section>

            <section id="services" class="py-5 bg-light">
                <div class="container">
                    <SectionHeading title="Our Services" subtitle="From a single room to the whole home." />
                    <CardGrid cards={SERVICES} card_class="service-card" stagger_ms={config::CARD_STAGGER_MS} />
                </div>
            </section>

            <section id="collections" class="py-5">
                <div class="container">
                    <SectionHeading title="Collections" subtitle="Signature looks to start from." />
                    <Collections />
                </div>
            </section>

            <section id="contact" class="py-5 bg-light">
                <div class="container">
                    <SectionHeading title="Start Your Project" subtitle="Tell us about your space and we'll be in touch." />
                    <div class="row justify-content-center">
                        <div class="col-lg-8">
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </section>

            <Footer />
            <BackToTop />
        </div>
    }
}
