//! Document-wide presentation rules, applied once by the shell.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

/// Element id of the injected `<style>` node.
pub const GLOBAL_STYLE_ID: &str = "global-style";

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

const GLOBAL_CSS: &str = r#"
    /* --- RESET --- */
    * {
        margin: 0;
        padding: 0;
        outline: 0;
        box-sizing: border-box;
    }

    html, body {
        height: 100%;
        width: 100%;
    }

    body {
        background-color: var(--pico-background-color);
        color: var(--pico-color);
        -webkit-font-smoothing: antialiased;
    }

    body, input, button {
        font-family: 'Roboto Slab', serif;
        font-size: 16px;
    }

    h1, h2, h3, h4, h5, h6, strong {
        font-weight: 500;
    }

    button {
        cursor: pointer;
    }

    /* --- AUTH VIEWS --- */
    .auth-view {
        display: flex;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
    }

    .auth-view article {
        width: 100%;
        max-width: 340px;
    }

    .view-switcher {
        justify-content: flex-end;
        padding: 0 1rem;
    }
"#;

/// Injects the global stylesheet. The shell mounts this exactly once, after
/// the active view.
#[component]
pub fn GlobalStyle() -> Element {
    use_hook(|| debug!("global style applied"));

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        style {
            id: GLOBAL_STYLE_ID,
            "{GLOBAL_CSS}"
        }
    }
}
