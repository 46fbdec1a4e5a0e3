//=============================================================================
// File: src/screens/sign_up.rs
//=============================================================================
use crate::components::pico::{Button, Card, Container, Input};
use crate::ViewSelection;
use dioxus::prelude::*;

#[component]
pub fn SignUpView() -> Element {
    rsx! {
        section {
            id: ViewSelection::SignUp.dom_id(),
            class: "auth-view",
            Container {
                Card {
                    h1 { "Create your account" }
                    form {
                        onsubmit: move |evt| evt.prevent_default(),
                        Input { label: "Name", name: "name", placeholder: "Your name" }
                        Input { label: "E-mail", name: "email", input_type: "email", placeholder: "you@example.com" }
                        Input { label: "Password", name: "password", input_type: "password" }
                        Button { "Register" }
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
    fn renders_registration_form() {
        let mut dom = VirtualDom::new(SignUpView);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("id=\"sign-up\""));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"email\""));
        assert!(!html.contains("id=\"sign-in\""));
    }
}
