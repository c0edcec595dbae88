use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdEye, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{find_order, mock_orders, Order, OrderStatus, StatusTone};
use shared_ui::components::{
    Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle,
};

use super::detail::OrderDetailModal;
use super::selection::OrderSelection;
use crate::auth::use_can_see_admin_features;
use crate::routes::Route;

#[component]
pub fn OrderListPage() -> Element {
    let is_admin = use_can_see_admin_features();
    let orders = mock_orders();
    let mut selection = use_signal(OrderSelection::default);

    let open_details = move |id: u32| match find_order(id) {
        Ok(order) => {
            tracing::debug!(order_id = id, "viewing order details");
            selection.write().view_details(order);
        }
        Err(e) => tracing::warn!(order_id = id, error = %e, "could not open order"),
    };

    let selected = selection.read().selected().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./orders.css") }

        PageHeader {
            PageTitle { "Orders" }
            OrderListActions { is_admin }
        }

        OrderTable { orders, on_view: open_details }

        if let Some(order) = selected {
            OrderDetailModal {
                order,
                on_close: move |_| {
                    tracing::debug!("order details dismissed");
                    selection.write().dismiss();
                },
            }
        }
    }
}

/// Header actions. "New Order" is only offered to admins.
#[component]
pub fn OrderListActions(is_admin: bool) -> Element {
    rsx! {
        PageActions {
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    navigator().push(Route::Dashboard {});
                },
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                "Back to Dashboard"
            }
            if is_admin {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(Route::NewOrder {});
                    },
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "New Order"
                }
            }
        }
    }
}

/// The order rows in fixture order. `on_view` receives the clicked order's id.
#[component]
pub fn OrderTable(orders: Vec<Order>, on_view: EventHandler<u32>) -> Element {
    if orders.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { "No orders yet." }
                }
            }
        };
    }

    rsx! {
        Card {
            ul { class: "order-list",
                for order in orders {
                    OrderRow { key: "{order.id}", order, on_view }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: Order, on_view: EventHandler<u32>) -> Element {
    let id = order.id;

    rsx! {
        li { class: "order-row",
            div { class: "order-row-main",
                p { class: "order-row-name", "{order.customer_name}" }
                p { class: "order-row-phone", "{order.phone_number}" }
            }
            div { class: "order-row-side",
                StatusBadge { status: order.status }
                Button {
                    variant: ButtonVariant::Link,
                    onclick: move |_| on_view.call(id),
                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                    "View Details"
                }
            }
        }
    }
}

/// Badge tone for an order status.
pub fn status_badge_tone(status: OrderStatus) -> BadgeTone {
    match StatusTone::for_status(status) {
        StatusTone::Green => BadgeTone::Green,
        StatusTone::Yellow => BadgeTone::Yellow,
        StatusTone::Gray => BadgeTone::Gray,
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> Element {
    rsx! {
        Badge { tone: status_badge_tone(status), "{status}" }
    }
}
