//! Contact widget: a floating trigger and a dismissible contact panel.
//!
//! The panel is a bottom sheet below the mobile breakpoint and a centered
//! modal above it. Opening it closes the mobile navigation panel.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::hooks::{ElementRegion, use_dismiss};
use crate::components::icons as ic;
use crate::config::{contact, layout};
use crate::models::OverlayId;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

#[component]
pub fn ContactWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_mobile = use_media_query(layout::MOBILE_QUERY.to_string());

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();

    use_dismiss(
        OverlayId::ContactSheet,
        vec![
            ElementRegion::new(move || panel_ref.get_untracked().map(Into::into)),
            ElementRegion::new(move || trigger_ref.get_untracked().map(Into::into)),
        ],
    );

    let is_open = Signal::derive(move || ctx.is_open(OverlayId::ContactSheet));
    let close = move |_: leptos::ev::MouseEvent| ctx.close(OverlayId::ContactSheet);

    let panel_class = move || match (is_mobile.get(), is_open.get()) {
        (true, true) => css::sheetOpen,
        (true, false) => css::sheet,
        (false, true) => css::modalOpen,
        (false, false) => css::modal,
    };

    view! {
        <button
            node_ref=trigger_ref
            class=css::trigger
            aria-label="Contact"
            aria-haspopup="dialog"
            on:click=move |_| ctx.open_exclusive(OverlayId::ContactSheet, OverlayId::MobileNav)
        >
            <Icon icon=ic::CHAT />
        </button>

        <Show when=move || is_open.get()>
            <div class=css::backdrop aria-hidden="true" />
        </Show>

        <div
            node_ref=panel_ref
            class=panel_class
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class=css::header>
                <h2 class=css::title>"Get in touch"</h2>
                <button class=css::closeButton aria-label="Close" on:click=close>
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            <ul class=css::list>
                <ContactItem
                    icon=ic::MAIL
                    label="Email"
                    href=format!("mailto:{}", contact::EMAIL)
                    text=contact::EMAIL
                />
                <ContactItem icon=ic::LINKEDIN label="LinkedIn" href=contact::LINKEDIN text="muhammad-zain03" />
                <ContactItem icon=ic::GITHUB label="GitHub" href=contact::GITHUB text="muhammadzain03" />
            </ul>
        </div>
    }
}

#[component]
fn ContactItem(
    icon: icondata::Icon,
    label: &'static str,
    #[prop(into)] href: String,
    text: &'static str,
) -> impl IntoView {
    let external = href.starts_with("http");

    view! {
        <li>
            <a
                class=css::item
                href=href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                <span class=css::itemIcon><Icon icon=icon /></span>
                <span class=css::itemText>
                    <span class=css::itemLabel>{label}</span>
                    <span class=css::itemValue>{text}</span>
                </span>
            </a>
        </li>
    }
}
