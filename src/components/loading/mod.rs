//! Route-change loading indicator.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::OverlayId;

stylance::import_crate_style!(css, "src/components/loading/loading.module.css");

/// Thin progress bar shown while a navigation is in flight.
#[component]
pub fn LoadingBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.is_open(OverlayId::LoadingIndicator)>
            <div class=css::bar role="progressbar" aria-label="Loading page" />
        </Show>
    }
}
