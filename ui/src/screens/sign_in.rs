//=============================================================================
// File: src/screens/sign_in.rs
//=============================================================================
use crate::components::pico::{Button, Card, Container, Input};
use crate::ViewSelection;
use dioxus::prelude::*;

#[component]
pub fn SignInView() -> Element {
    rsx! {
        section {
            id: ViewSelection::SignIn.dom_id(),
            class: "auth-view",
            Container {
                Card {
                    h1 { "Log in to your account" }
                    form {
                        onsubmit: move |evt| evt.prevent_default(),
                        Input { label: "E-mail", name: "email", input_type: "email", placeholder: "you@example.com" }
                        Input { label: "Password", name: "password", input_type: "password" }
                        Button { "Enter" }
                    }
                    footer {
                        a { href: "#", "Forgot my password" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_credentials_form() {
        let mut dom = VirtualDom::new(SignInView);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("id=\"sign-in\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("name=\"name\""));
        assert_eq!(html.matches("<button type=\"submit\"").count(), 1);
    }
}
