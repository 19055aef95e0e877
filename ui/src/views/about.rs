use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("page-about-title")} }
            p { {crate::t!("page-about-intro")} }
        }
    }
}
