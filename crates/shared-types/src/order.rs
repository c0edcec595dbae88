use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

// ── Order status ────────────────────────────────────────────────────

/// Progress of an order or of a single item within it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl OrderStatus {
    /// Human-readable label shown in badges and the detail modal.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge color family for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Gray,
}

impl StatusTone {
    /// Completed is green, in-progress is yellow, everything else is gray.
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Completed => StatusTone::Green,
            OrderStatus::InProgress => StatusTone::Yellow,
            _ => StatusTone::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Green => "green",
            StatusTone::Yellow => "yellow",
            StatusTone::Gray => "gray",
        }
    }
}

// ── Orders ──────────────────────────────────────────────────────────

/// A line item inside an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub description: String,
    /// Image URLs in display order. Only the first one is previewed.
    pub images: Vec<String>,
    pub status: OrderStatus,
}

impl OrderItem {
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub customer_name: String,
    pub phone_number: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

// ── Fixtures ────────────────────────────────────────────────────────

/// Base URL for the placeholder item photos.
const IMAGE_BASE_URL: &str = "https://source.unsplash.com/random/800x600";

fn item(description: &str, sig: u32, status: OrderStatus) -> OrderItem {
    OrderItem {
        description: description.to_string(),
        images: vec![format!("{IMAGE_BASE_URL}?sig={sig}")],
        status,
    }
}

/// The static order list rendered by the order pages, in display order.
pub fn mock_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            customer_name: "John Doe".into(),
            phone_number: "123-456-7890".into(),
            status: OrderStatus::InProgress,
            items: vec![
                item("Item 1", 1, OrderStatus::InProgress),
                item("Item 2", 2, OrderStatus::Completed),
            ],
        },
        Order {
            id: 2,
            customer_name: "Jane Smith".into(),
            phone_number: "098-765-4321".into(),
            status: OrderStatus::Pending,
            items: vec![item("Item 3", 3, OrderStatus::Pending)],
        },
        Order {
            id: 3,
            customer_name: "Bob Johnson".into(),
            phone_number: "555-555-5555".into(),
            status: OrderStatus::Completed,
            items: vec![
                item("Item 4", 4, OrderStatus::Completed),
                item("Item 5", 5, OrderStatus::Completed),
            ],
        },
    ]
}

/// Find a fixture order by id.
pub fn find_order(id: u32) -> Result<Order, AppError> {
    mock_orders()
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;
    use std::collections::HashSet;

    #[test]
    fn status_tone_mapping() {
        assert_eq!(StatusTone::for_status(OrderStatus::Completed), StatusTone::Green);
        assert_eq!(StatusTone::for_status(OrderStatus::InProgress), StatusTone::Yellow);
        assert_eq!(StatusTone::for_status(OrderStatus::Pending), StatusTone::Gray);
    }

    #[test]
    fn status_labels_match_display() {
        for status in [OrderStatus::Pending, OrderStatus::InProgress, OrderStatus::Completed] {
            assert_eq!(status.to_string(), status.label());
        }
        assert_eq!(OrderStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, r#""In Progress""#);
        let parsed: OrderStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(parsed, OrderStatus::Completed);
    }

    #[test]
    fn fixture_ids_are_unique() {
        let orders = mock_orders();
        let ids: HashSet<u32> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn fixtures_keep_insertion_order() {
        let names: Vec<String> = mock_orders().into_iter().map(|o| o.customer_name).collect();
        assert_eq!(names, ["John Doe", "Jane Smith", "Bob Johnson"]);
    }

    #[test]
    fn every_fixture_item_has_an_image() {
        for order in mock_orders() {
            for item in &order.items {
                let url = item.first_image().unwrap();
                assert!(url.starts_with(IMAGE_BASE_URL), "{url}");
            }
        }
    }

    #[test]
    fn first_image_of_empty_item_is_none() {
        let item = OrderItem {
            description: "Loose part".into(),
            images: vec![],
            status: OrderStatus::Pending,
        };
        assert_eq!(item.first_image(), None);
    }

    #[test]
    fn find_order_returns_matching_fixture() {
        let order = find_order(2).unwrap();
        assert_eq!(order.customer_name, "Jane Smith");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn find_order_unknown_id_is_not_found() {
        let err = find_order(99).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Order 99 not found");
    }
}
