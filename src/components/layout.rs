//! Shared page chrome: header, content slot, and footer.

use leptos::prelude::*;

use crate::components::header::SiteHeader;

/// Wraps page content with the site header and footer.
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <SiteHeader />
            <main class="site-layout__main">{children()}</main>
            <footer class="site-footer">
                <p class="site-footer__disclaimer">
                    "Disclaimer:" <br />
                    "All information presented on this website is purely fictitious and created solely for portfolio and demonstration purposes. Any resemblance to actual persons, institutions, or events is entirely coincidental. The developer bears no responsibility or liability for the accuracy, authenticity, or interpretation of the content displayed herein."
                </p>
                <div class="site-footer__meta">
                    <span>"© 2025 Team BlackCat"</span>
                    <span>"Built with Rust • Leptos • WebAssembly"</span>
                    <span>"Developed By Dhiman Roy"</span>
                </div>
            </footer>
        </div>
    }
}
