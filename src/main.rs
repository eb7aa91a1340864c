use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod animation {
    pub mod easing;
    pub mod tween;
    pub mod timeline;
    pub mod reveal;
    pub mod scroll;
}
mod contact {
    pub mod form;
    pub mod relay;
}
mod components {
    pub mod ui;
    pub mod toast;
    pub mod error_boundary;
    pub mod lazy_section;
    pub mod scroll_to_top;
}
mod layout {
    pub mod navbar;
    pub mod footer;
    pub mod page_transition;
    pub mod section_transition;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod projects;
    pub mod project_card;
    pub mod contact;
}
mod pages {
    pub mod home;
}

use components::{
    error_boundary::install_panic_fallback,
    scroll_to_top::ScrollToTop,
    toast::ToastHost,
    ui::UI_CSS,
};
use layout::page_transition::PageTransition;
use pages::home::Home;

const GLOBAL_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    min-height: 100vh;
    background: radial-gradient(circle at top, #1a1207 0%, #0a0a0a 45%, #000 100%);
    color: #fff;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    overflow-x: hidden;
}
::selection {
    background: #e77402;
    color: #000;
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{GLOBAL_CSS}{UI_CSS}</style>
            <ToastHost>
                <PageTransition>
                    <Home />
                </PageTransition>
                <ScrollToTop />
            </ToastHost>
        </>
    }
}

fn main() {
    // Error boundary: panics land in the console and swap the page for the reload fallback
    install_panic_fallback();

    let level = if config::is_dev() { Level::Debug } else { Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
