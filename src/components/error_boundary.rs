use std::panic;

use crate::config;

const FALLBACK_TITLE: &str = "Something went wrong";
const FALLBACK_BODY: &str =
    "We're sorry, but something unexpected happened. Please try refreshing the page.";

const FALLBACK_CSS: &str = r#"
.error-fallback {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, #111827 0%, #000 100%);
    color: #fff;
    padding: 0 1.25rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.error-fallback-card {
    text-align: center;
    max-width: 28rem;
}
.error-fallback-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    border: 3px solid #e77402;
    color: #e77402;
    font-size: 2rem;
    font-weight: bold;
    display: flex;
    align-items: center;
    justify-content: center;
}
.error-fallback h1 {
    font-size: 1.875rem;
    margin-bottom: 1rem;
}
.error-fallback p {
    color: #d1d5db;
    margin-bottom: 1.5rem;
}
.error-fallback button {
    padding: 0.75rem 1.5rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 0.5rem;
    color: #fff;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s;
}
.error-fallback button:hover {
    background: rgba(255, 255, 255, 0.2);
}
"#;

/// Self-contained fallback screen. A panicked wasm instance cannot re-render,
/// so it carries its own styles and reloads through plain DOM.
pub fn fallback_markup() -> String {
    format!(
        r#"<style>{css}</style><div class="error-fallback"><div class="error-fallback-card"><div class="error-fallback-icon">!</div><h1>{title}</h1><p>{body}</p><button onclick="window.location.reload()">Refresh Page</button></div></div>"#,
        css = FALLBACK_CSS,
        title = FALLBACK_TITLE,
        body = FALLBACK_BODY,
    )
}

/// The application's error boundary: any unhandled failure below the root
/// lands in the console and swaps the whole page for the fallback screen.
/// There is no partial recovery; the only way out is a reload.
pub fn install_panic_fallback() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if config::is_dev() {
            log::error!("Error caught by boundary: {}", info);
        }
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            body.set_inner_html(&fallback_markup());
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_carries_its_own_styles() {
        let markup = fallback_markup();
        assert!(markup.starts_with("<style>"));
        assert!(markup.contains(".error-fallback {"));
        assert!(markup.contains(FALLBACK_BODY));
    }

    #[test]
    fn panic_markup_offers_a_reload() {
        let markup = fallback_markup();
        assert!(markup.contains("Something went wrong"));
        assert!(markup.contains("window.location.reload()"));
        assert!(markup.contains("Refresh Page"));
    }
}
