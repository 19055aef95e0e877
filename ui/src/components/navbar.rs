use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

use super::Avatar;
use crate::config::{APP_TITLE, AVATAR_BUTTON_ID, ICON_SIZE_PX, MENU_ID, NAVBAR_ID};
use crate::core::menu::{menu_entries, Destination, MenuEntry, MenuEvent, MenuState};
use crate::core::route::Section;
use crate::session::{SessionContext, User};
use crate::t;
use crate::theme::ThemeContext;

const LOGO: Asset = asset!("/assets/images/logo.svg");

/// Host-supplied element constructors.
///
/// The shared crate does not know the host's `Route` enum, so each host hands
/// in plain functions that wrap content in its own router `Link`s:
///
/// ```ignore
/// NavBuilder {
///     brand: |contents| rsx!( Link { class: "navbar__brand", to: Route::About {}, {contents} } ),
///     link: |destination, label| rsx!( Link { to: Route::from(destination), "{label}" } ),
///     profile: |user| rsx!( ProfileBadge { user: user.clone() } ),
/// }
/// ```
#[derive(Clone, Copy)]
pub struct NavBuilder {
    /// Home link wrapping the logo and title.
    pub brand: fn(contents: Element) -> Element,
    /// Menu link to `destination`, whose only child is `label`.
    pub link: fn(destination: Destination, label: &str) -> Element,
    /// Profile entry at the top of the menu for a signed-in user.
    pub profile: fn(user: &User) -> Element,
}

impl PartialEq for NavBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.brand as usize == other.brand as usize
            && self.link as usize == other.link as usize
            && self.profile as usize == other.profile as usize
    }
}

/// Site header: home link, theme toggle and the user menu.
///
/// `path` is the current router path; the menu hides the link to the page
/// already on screen.
#[component]
pub fn Navbar(
    path: String,
    session: SessionContext,
    theme: ThemeContext,
    links: NavBuilder,
) -> Element {
    crate::i18n::init();

    let mut menu = use_signal(MenuState::default);

    let section = Section::from_path(&path);
    let user = session.user();
    let entries = menu_entries(user.is_some(), &section);
    let dark = theme.get().is_dark();
    let open = menu.read().is_open();

    tracing::trace!(?section, ?entries, open, "navbar render");

    let open_menu = move |_| {
        menu.write()
            .apply(MenuEvent::AnchorClicked(AVATAR_BUTTON_ID.to_string()));
    };
    let dismiss_menu = move |_| menu.write().apply(MenuEvent::Dismissed);

    let header_class = if dark { "navbar navbar--dark" } else { "navbar" };
    let menu_class = if open {
        "navbar-menu navbar-menu--open"
    } else {
        "navbar-menu"
    };
    let toggle_label = t!("navbar-toggle-theme");
    let settings_label = t!("navbar-open-settings");
    let logo_alt = t!("navbar-logo-alt");

    rsx! {
        header { id: NAVBAR_ID, class: header_class,
            div { class: "navbar__inner",
                {(links.brand)(rsx! {
                    img { class: "navbar__logo", src: LOGO, alt: "{logo_alt}" }
                    span { class: "navbar__title", {APP_TITLE} }
                })}

                div { class: "navbar__actions",
                    button {
                        class: "navbar__icon-button",
                        r#type: "button",
                        title: "{toggle_label}",
                        aria_label: "{toggle_label}",
                        onclick: move |_| toggle_theme(theme, menu),
                        if dark {
                            Icon { width: ICON_SIZE_PX, height: ICON_SIZE_PX, icon: FaSun }
                        } else {
                            Icon { width: ICON_SIZE_PX, height: ICON_SIZE_PX, icon: FaMoon }
                        }
                    }

                    // Focus stays on the avatar button while the menu is open,
                    // so Escape is caught on the shared wrapper.
                    div {
                        class: "navbar__menu-anchor",
                        onkeydown: move |evt: KeyboardEvent| menu_key(&evt.key(), menu),
                        button {
                            id: AVATAR_BUTTON_ID,
                            class: "navbar__avatar-button",
                            r#type: "button",
                            title: "{settings_label}",
                            aria_haspopup: "menu",
                            aria_expanded: "{open}",
                            aria_controls: MENU_ID,
                            onclick: open_menu,
                            Avatar { user: user.clone() }
                        }

                        // Any click outside the menu lands on the backdrop.
                        if open {
                            div { class: "navbar-menu__backdrop", onclick: dismiss_menu }
                        }

                        ul {
                            id: MENU_ID,
                            class: menu_class,
                            role: "menu",
                            hidden: !open,
                            aria_labelledby: AVATAR_BUTTON_ID,
                            for entry in entries {
                                li {
                                    key: "{entry:?}",
                                    class: "navbar-menu__item",
                                    role: "menuitem",
                                    onclick: move |_| select_entry(entry, session, menu),
                                    {entry_body(entry, user.as_ref(), &links)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn toggle_theme(theme: ThemeContext, mut menu: Signal<MenuState>) {
    theme.toggle();
    menu.write().apply(MenuEvent::ThemeToggled);
}

fn select_entry(entry: MenuEntry, session: SessionContext, mut menu: Signal<MenuState>) {
    if entry == MenuEntry::LogOut {
        session.logout();
    }
    menu.write().apply(MenuEvent::ItemSelected(entry));
}

fn menu_key(key: &Key, mut menu: Signal<MenuState>) {
    if *key == Key::Escape {
        menu.write().apply(MenuEvent::Dismissed);
    }
}

fn entry_body(entry: MenuEntry, user: Option<&User>, links: &NavBuilder) -> Element {
    match entry {
        MenuEntry::Profile => match user {
            Some(user) => (links.profile)(user),
            None => rsx! {},
        },
        MenuEntry::BrowseCryptos => (links.link)(Destination::Cryptos, &t!("menu-browse-cryptos")),
        MenuEntry::News => (links.link)(Destination::News, &t!("menu-news")),
        MenuEntry::About => (links.link)(Destination::About, &t!("menu-about")),
        MenuEntry::LogIn => (links.link)(Destination::Login, &t!("menu-log-in")),
        MenuEntry::LogOut => rsx! {
            span { class: "navbar-menu__action", {t!("menu-log-out")} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{THEME_STORAGE_KEY, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
    use crate::core::storage;

    fn run(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn open_menu() -> Signal<MenuState> {
        use_signal(|| MenuState::open(AVATAR_BUTTON_ID))
    }

    fn theme_toggle() -> Element {
        let theme = crate::use_theme_provider();
        let menu = open_menu();
        let dark = use_hook(|| {
            toggle_theme(theme, menu);
            theme.get().is_dark()
        });
        rsx! { p { "dark={dark} open={menu.read().is_open()}" } }
    }

    #[test]
    fn theme_toggle_flips_theme_and_closes_menu() {
        storage::write(THEME_STORAGE_KEY, "light").unwrap();
        let html = run(theme_toggle);
        assert!(html.contains("dark=true open=false"), "{html}");
        assert_eq!(storage::read(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    }

    fn pick_news() -> Element {
        let session = crate::use_session_provider();
        let menu = open_menu();
        use_hook(|| select_entry(MenuEntry::News, session, menu));
        rsx! { p { "signed_in={session.is_authenticated()} open={menu.read().is_open()}" } }
    }

    fn pick_log_out() -> Element {
        let session = crate::use_session_provider();
        let menu = open_menu();
        use_hook(|| select_entry(MenuEntry::LogOut, session, menu));
        rsx! { p { "signed_in={session.is_authenticated()} open={menu.read().is_open()}" } }
    }

    fn sign_in_stored() {
        storage::write_json(USER_STORAGE_KEY, &User::new("satoshi")).unwrap();
        storage::write(TOKEN_STORAGE_KEY, "tok").unwrap();
    }

    #[test]
    fn link_click_closes_menu_and_keeps_session() {
        sign_in_stored();
        let html = run(pick_news);
        assert!(html.contains("signed_in=true open=false"), "{html}");
    }

    #[test]
    fn log_out_click_signs_out_and_closes_menu() {
        sign_in_stored();
        let html = run(pick_log_out);
        assert!(html.contains("signed_in=false open=false"), "{html}");
        assert_eq!(storage::read(TOKEN_STORAGE_KEY).unwrap(), None);
    }

    fn keys() -> Element {
        let menu = open_menu();
        let after_enter = use_hook(|| {
            menu_key(&Key::Enter, menu);
            menu.read().is_open()
        });
        use_hook(|| menu_key(&Key::Escape, menu));
        rsx! { p { "enter={after_enter} escape={menu.read().is_open()}" } }
    }

    #[test]
    fn only_escape_dismisses_the_menu() {
        let html = run(keys);
        assert!(html.contains("enter=true escape=false"), "{html}");
    }
}
