use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{demo_users, AppConfig, AppError, User, UserRole, SUPER_ADMIN_LABEL};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormSelect, Input,
};

/// Role offered to non-admin sign-ins.
const STAFF_LABEL: &str = "Staff";

/// Check the sign-in form and build the user it describes.
pub fn validate_sign_in(name: &str, role: &str) -> Result<User, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::field("name", "Name is required"));
    }
    Ok(User::new(name, UserRole::from_label(role)))
}

/// Mock sign-in page. Picks a name and role and stores them in `AuthState`.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let config: AppConfig = use_context();
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| SUPER_ADMIN_LABEL.to_string());
    let mut name_error = use_signal(|| Option::<String>::None);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        match validate_sign_in(&name(), &role()) {
            Ok(user) => {
                name_error.set(None);
                auth.set_user(user);
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::debug!(error = %e, "sign-in rejected");
                name_error.set(e.field_error("name").map(str::to_string));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Choose a name and role to continue" }
                }

                CardContent {
                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Name",
                                id: "name",
                                placeholder: "Your name",
                                value: name(),
                                error: name_error(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            FormSelect {
                                label: "Role",
                                value: role(),
                                onchange: move |e: Event<FormData>| role.set(e.value()),
                                option { value: SUPER_ADMIN_LABEL, "Super Admin" }
                                option { value: STAFF_LABEL, "Staff" }
                            }
                        }
                        Button { submit: true, class: "auth-submit", "Sign In" }
                    }
                }

                if config.features.demo_accounts {
                    CardFooter {
                        DemoAccounts {
                            on_pick: move |user: User| {
                                auth.set_user(user);
                                navigator().push(Route::Dashboard {});
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Caption for a demo sign-in button.
fn demo_caption(user: &User) -> &'static str {
    if user.role.is_super_admin() {
        "Sign in as Super Admin"
    } else {
        "Sign in as Staff"
    }
}

/// One-click sign-in buttons for the built-in demo users.
#[component]
fn DemoAccounts(on_pick: EventHandler<User>) -> Element {
    rsx! {
        div { class: "auth-demo",
            p { class: "auth-demo-title", "Demo accounts" }
            for user in demo_users() {
                DemoButton { key: "{user.name}", user, on_pick }
            }
        }
    }
}

#[component]
fn DemoButton(user: User, on_pick: EventHandler<User>) -> Element {
    let caption = demo_caption(&user);

    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            class: "auth-demo-button",
            onclick: move |_| on_pick.call(user.clone()),
            "{caption}"
        }
    }
}
