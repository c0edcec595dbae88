use shared_types::Order;

/// Which order, if any, has its detail modal open.
///
/// Holding the order inside the variant keeps "at most one selected" true by
/// construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrderSelection {
    #[default]
    NoSelection,
    Selected(Order),
}

impl OrderSelection {
    /// Open the detail modal for `order`, replacing any current selection.
    pub fn view_details(&mut self, order: Order) {
        *self = OrderSelection::Selected(order);
    }

    /// Close the detail modal. No-op when nothing is selected.
    pub fn dismiss(&mut self) {
        *self = OrderSelection::NoSelection;
    }

    pub fn selected(&self) -> Option<&Order> {
        match self {
            OrderSelection::Selected(order) => Some(order),
            OrderSelection::NoSelection => None,
        }
    }
}
