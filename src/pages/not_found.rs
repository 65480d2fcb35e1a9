//! Catch-all page for unmatched routes.

use leptos::prelude::*;

use crate::components::layout::SiteLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <p class="not-found">"Not found."</p>
        </SiteLayout>
    }
}
