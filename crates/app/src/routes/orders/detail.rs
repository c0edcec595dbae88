use dioxus::prelude::*;
use shared_types::{Order, OrderItem};
use shared_ui::components::{
    Button, ButtonVariant, DetailItem, DetailList, Modal, ModalContent, ModalFooter, ModalHeader,
    ModalTitle,
};

/// Detail modal for a single order: contact info, status and its items.
#[component]
pub fn OrderDetailModal(order: Order, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal { open: true, on_close: move |_| on_close.call(()),
            ModalHeader {
                ModalTitle { "{order.customer_name}" }
            }
            ModalContent {
                DetailList {
                    DetailItem { label: "Phone", value: order.phone_number.clone() }
                    DetailItem { label: "Status", value: order.status.label().to_string() }
                }
                div { class: "order-items",
                    h4 { class: "order-items-title", "Order Items:" }
                    for (index, item) in order.items.iter().enumerate() {
                        OrderItemRow { key: "{index}", item: item.clone() }
                    }
                }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// One item inside the detail modal, previewing only its first image.
#[component]
fn OrderItemRow(item: OrderItem) -> Element {
    rsx! {
        div { class: "order-item",
            p { class: "order-item-description", "{item.description}" }
            p { class: "order-item-status", "Status: {item.status}" }
            if let Some(src) = item.first_image() {
                img { class: "order-item-image", src: "{src}", alt: "Item" }
            }
        }
    }
}
