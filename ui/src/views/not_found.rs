use dioxus::prelude::*;

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("page-not-found-title")} }
            p { {crate::t!("page-not-found-detail", path = path.as_str())} }
        }
    }
}
