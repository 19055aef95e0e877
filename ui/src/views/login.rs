use dioxus::prelude::*;

use crate::session::{SessionContext, User};

/// Local sign-in form. There is no backend yet, so a non-empty user name is
/// enough to start a session.
#[component]
pub fn Login(session: SessionContext, on_signed_in: EventHandler<()>) -> Element {
    let mut username = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = username.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        session.sign_in(User::new(name), None);
        username.set(String::new());
        on_signed_in.call(());
    };

    rsx! {
        section { class: "page page-login",
            h1 { {crate::t!("page-login-title")} }
            form { class: "login-form", onsubmit,
                label { r#for: "login-username", {crate::t!("page-login-username")} }
                input {
                    id: "login-username",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                button { class: "button button--primary", r#type: "submit",
                    {crate::t!("page-login-submit")}
                }
            }
        }
    }
}
