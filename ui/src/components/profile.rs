use dioxus::prelude::*;

use super::Avatar;
use crate::session::User;

/// Compact profile card shown at the top of the user menu.
#[component]
pub fn ProfileBadge(user: User) -> Element {
    let signed_in = crate::t!("menu-profile-signed-in", name = user.username.as_str());

    rsx! {
        div { class: "profile-badge",
            Avatar { user: Some(user.clone()) }
            span { class: "profile-badge__name", "{signed_in}" }
        }
    }
}
