use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdLock};
use dioxus_free_icons::Icon;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle,
};

use crate::auth::use_can_see_admin_features;
use crate::routes::Route;

/// New-order page. Only super admins get past the gate; the form itself is
/// still a placeholder.
#[component]
pub fn NewOrderPage() -> Element {
    let allowed = use_can_see_admin_features();
    if !allowed {
        tracing::debug!("new-order page denied for non-admin user");
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./orders.css") }

        PageHeader {
            PageTitle { "New Order" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        navigator().push(Route::OrderList {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back to Orders"
                }
            }
        }

        NewOrderBody { allowed }
    }
}

#[component]
fn NewOrderBody(allowed: bool) -> Element {
    if !allowed {
        return rsx! {
            Card { class: "order-access-denied",
                CardHeader {
                    Icon::<LdLock> { icon: LdLock, width: 24, height: 24 }
                    CardTitle { "Access denied" }
                    CardDescription { "Only super admins can create orders." }
                }
            }
        };
    }

    rsx! {
        Card {
            CardContent {
                p { class: "order-placeholder", "Order creation is coming soon." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_placeholder() {
        let html = dioxus_ssr::render_element(rsx! { NewOrderBody { allowed: true } });
        assert!(html.contains("Order creation is coming soon."), "{html}");
        assert!(!html.contains("Access denied"), "{html}");
    }

    #[test]
    fn others_see_access_denied() {
        let html = dioxus_ssr::render_element(rsx! { NewOrderBody { allowed: false } });
        assert!(html.contains("Access denied"), "{html}");
        assert!(!html.contains("coming soon"), "{html}");
    }
}
