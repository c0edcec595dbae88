pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod orders;

use crate::auth::{use_auth, use_current_user};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{AppConfig, User};
use shared_ui::{Button, ButtonVariant, Navbar, NavbarText};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/orders")]
    OrderList {},
    #[route("/new-order")]
    NewOrder {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: redirects to /login if nobody is signed in.
///
/// Everything nested under it may assume `AuthState` holds a user.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    tracing::debug!("no signed-in user; redirecting to login");
    navigator().push(Route::Login {});
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting to login..." }
        }
    }
}

/// Navbar greeting for the signed-in user.
pub fn greeting(user: &User) -> String {
    format!("Welcome, {} ({})", user.name, user.role)
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let config: AppConfig = use_context();
    let mut auth = use_auth();
    let welcome = greeting(&use_current_user());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Navbar {
                brand: config.app_name.clone(),
                icon: rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 32, height: 32 } },
                NavbarText { "{welcome}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        auth.logout();
                        navigator().push(Route::Login {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    "Logout"
                }
            }

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

// Order route components

#[component]
fn OrderList() -> Element {
    orders::list::OrderListPage()
}

#[component]
fn NewOrder() -> Element {
    orders::create::NewOrderPage()
}
