// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

mod components;
pub mod config;
mod screens;

use components::action_link::ActionLink;
use components::global_style::GlobalStyle;
use config::ShellConfig;
use screens::sign_in::SignInView;
use screens::sign_up::SignUpView;

/// The top-level views the shell can mount. Exactly one is active at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ViewSelection {
    #[default]
    #[strum(serialize = "SignIn", serialize = "sign-in")]
    SignIn,
    #[strum(serialize = "SignUp", serialize = "sign-up")]
    SignUp,
}

impl ViewSelection {
    /// Helper to get the display name for each view.
    pub fn name(&self) -> &'static str {
        match self {
            ViewSelection::SignIn => "Sign In",
            ViewSelection::SignUp => "Sign Up",
        }
    }

    /// Element id of the view's root node.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ViewSelection::SignIn => "sign-in",
            ViewSelection::SignUp => "sign-up",
        }
    }

    /// The view on the other side of the switch.
    pub fn toggled(self) -> Self {
        match self {
            ViewSelection::SignIn => ViewSelection::SignUp,
            ViewSelection::SignUp => ViewSelection::SignIn,
        }
    }
}

/// Every mountable view, in registry order.
pub const ALL_VIEWS: [ViewSelection; 2] = [ViewSelection::SignIn, ViewSelection::SignUp];

/// Link that flips the active view. Only rendered when the toggle is enabled.
#[component]
fn ViewSwitcher(active: Signal<ViewSelection>) -> Element {
    let target = active().toggled();
    rsx! {
        nav {
            class: "view-switcher",
            ul {
                li {
                    ActionLink {
                        state: active,
                        to: target,
                        "{target.name()}"
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ShellProps {
    #[props(default)]
    pub selection: ViewSelection,
    #[props(default = false)]
    pub view_toggle: bool,
}

/// Mounts the selected view followed by the global style.
///
/// The selection is owned here and provided to descendants as context. Without
/// the toggle nothing writes to it, so the mounted view stays fixed for the
/// lifetime of the document.
#[allow(non_snake_case)]
pub fn Shell(props: ShellProps) -> Element {
    let active = use_signal(|| props.selection);
    use_context_provider(|| active);

    rsx! {
        if props.view_toggle {
            ViewSwitcher {
                active,
            }
        }
        match active() {
            ViewSelection::SignIn => rsx! {
                SignInView {}
            },
            ViewSelection::SignUp => rsx! {
                SignUpView {}
            },
        }
        GlobalStyle {}
    }
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_hook(|| {
        let config = ShellConfig::from_build_env();
        info!("shell config: {:?}", config);
        config
    });

    rsx! {
        Shell {
            selection: config.initial_view,
            view_toggle: config.view_toggle,
        }
    }
}
