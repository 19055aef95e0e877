use dioxus::prelude::*;

use crate::components::Skeleton;

const PLACEHOLDER_ROWS: usize = 8;

#[component]
pub fn Cryptos() -> Element {
    let loading = crate::t!("page-loading");

    rsx! {
        section { class: "page page-cryptos",
            h1 { {crate::t!("page-cryptos-title")} }
            div { class: "crypto-table", aria_busy: "true", aria_label: "{loading}",
                for row in 0..PLACEHOLDER_ROWS {
                    div { key: "{row}", class: "crypto-table__row",
                        Skeleton { class: "crypto-table__icon" }
                        Skeleton { class: "crypto-table__name" }
                        Skeleton { class: "crypto-table__price" }
                    }
                }
            }
        }
    }
}
