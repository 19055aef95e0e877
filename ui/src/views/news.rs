use dioxus::prelude::*;

use crate::components::Skeleton;

const PLACEHOLDER_CARDS: usize = 4;

#[component]
pub fn News() -> Element {
    let loading = crate::t!("page-loading");

    rsx! {
        section { class: "page page-news",
            h1 { {crate::t!("page-news-title")} }
            div { class: "news-grid", aria_busy: "true", aria_label: "{loading}",
                for card in 0..PLACEHOLDER_CARDS {
                    article { key: "{card}", class: "news-card",
                        Skeleton { class: "news-card__image" }
                        Skeleton { class: "news-card__headline" }
                        Skeleton { class: "news-card__line", style: "width: 80%" }
                    }
                }
            }
        }
    }
}
