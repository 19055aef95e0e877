use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleUser;
use dioxus_free_icons::Icon;

use crate::config::AVATAR_SIZE_PX;
use crate::session::User;

/// What the avatar circle shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarFace {
    Picture { src: String, alt: String },
    Initial(char),
    Placeholder,
}

impl AvatarFace {
    pub fn for_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::Placeholder;
        };
        if let Some(src) = user.profile_picture.as_ref().filter(|src| !src.is_empty()) {
            return Self::Picture {
                src: src.clone(),
                alt: user.username.clone(),
            };
        }
        user.initial().map_or(Self::Placeholder, Self::Initial)
    }
}

#[component]
pub fn Avatar(user: Option<User>) -> Element {
    let size = format!("width: {AVATAR_SIZE_PX}px; height: {AVATAR_SIZE_PX}px;");

    rsx! {
        span { class: "avatar", style: "{size}",
            {match AvatarFace::for_user(user.as_ref()) {
                AvatarFace::Picture { src, alt } => rsx! {
                    img { class: "avatar__img", src: "{src}", alt: "{alt}" }
                },
                AvatarFace::Initial(letter) => rsx! {
                    span { class: "avatar__initial", "{letter}" }
                },
                AvatarFace::Placeholder => rsx! {
                    Icon {
                        class: "avatar__icon",
                        width: AVATAR_SIZE_PX,
                        height: AVATAR_SIZE_PX,
                        fill: "currentColor",
                        icon: FaCircleUser,
                    }
                },
            }}
        }
    }
}
