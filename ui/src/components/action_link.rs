use crate::ViewSelection;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    // Signals are Copy, so no lifetimes or references here.
    pub state: Signal<ViewSelection>,
    pub to: ViewSelection,
    pub children: Element,
}

/// An in-page link that switches views instead of navigating.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let mut state = props.state;
                state.set(props.to);
            },
            {props.children}
        }
    }
}
