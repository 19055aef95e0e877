use dioxus::prelude::*;

use ui::components::{NavBuilder, Navbar, ProfileBadge};
use ui::core::menu::Destination;
use ui::views::{About, Cryptos, News};
use ui::User;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    About {},
    #[route("/cryptos")]
    Cryptos {},
    #[route("/news")]
    News {},
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Cryptos => Route::Cryptos {},
            Destination::News => Route::News {},
            Destination::About => Route::About {},
            Destination::Login => Route::Login {},
        }
    }
}

fn nav_brand(contents: Element) -> Element {
    rsx!(Link { class: "navbar__brand", to: Route::About {}, {contents} })
}
fn nav_link(destination: Destination, label: &str) -> Element {
    rsx!(Link { to: Route::from(destination), "{label}" })
}
fn nav_profile(user: &User) -> Element {
    rsx!(ProfileBadge { user: user.clone() })
}

const NAV_LINKS: NavBuilder = NavBuilder {
    brand: nav_brand,
    link: nav_link,
    profile: nav_profile,
};

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Created once here and passed down explicitly.
    ui::use_theme_provider();
    ui::use_session_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Layout route: the shared `Navbar` above the routed page.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();
    let session = ui::use_session();
    let theme = ui::use_theme();

    rsx! {
        Navbar { path: route.to_string(), session, theme, links: NAV_LINKS }
        main { class: "page-shell", Outlet::<Route> {} }
    }
}

#[component]
fn Login() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    rsx! {
        ui::views::Login {
            session,
            on_signed_in: move |_| {
                nav.push(Route::Cryptos {});
            },
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        ui::views::NotFound { path }
    }
}
