pub mod analytics;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdPlus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{can_see_admin_features, User, ANALYTICS};
use shared_ui::{IconStat, PageHeader, PageTitle};

use crate::auth::use_current_user;
use crate::routes::Route;
use analytics::AnalyticsPanel;

/// Action tiles offered below the analytics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTile {
    CreateOrder,
    ViewOrders,
    /// Placeholder; user management is not built yet.
    ManageUsers,
}

impl DashboardTile {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardTile::CreateOrder => "Create New Order",
            DashboardTile::ViewOrders => "View Orders",
            DashboardTile::ManageUsers => "Manage Users",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardTile::CreateOrder => "Start here",
            DashboardTile::ViewOrders => "Manage existing orders",
            DashboardTile::ManageUsers => "Coming soon",
        }
    }

    fn accent(&self) -> &'static str {
        match self {
            DashboardTile::CreateOrder => "indigo",
            DashboardTile::ViewOrders => "green",
            DashboardTile::ManageUsers => "yellow",
        }
    }

    /// Where the tile navigates, if anywhere.
    pub fn target(&self) -> Option<Route> {
        match self {
            DashboardTile::CreateOrder => Some(Route::NewOrder {}),
            DashboardTile::ViewOrders => Some(Route::OrderList {}),
            DashboardTile::ManageUsers => None,
        }
    }
}

/// Tiles visible to `user`, in display order.
pub fn dashboard_tiles(user: &User) -> Vec<DashboardTile> {
    let admin = can_see_admin_features(user);
    let mut tiles = Vec::with_capacity(3);
    if admin {
        tiles.push(DashboardTile::CreateOrder);
    }
    tiles.push(DashboardTile::ViewOrders);
    if admin {
        tiles.push(DashboardTile::ManageUsers);
    }
    tiles
}

/// Landing page: analytics figures plus the role-gated action tiles.
#[component]
pub fn Dashboard() -> Element {
    let user = use_current_user();
    let tiles = dashboard_tiles(&user);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Dashboard" }
        }

        AnalyticsPanel { summary: ANALYTICS }

        div { class: "dashboard-tiles",
            for tile in tiles {
                ActionTile { key: "{tile:?}", tile }
            }
        }
    }
}

/// A single action tile. Tiles without a target render as static cards.
#[component]
fn ActionTile(tile: DashboardTile) -> Element {
    match tile.target() {
        Some(route) => rsx! {
            Link { to: route, class: "dashboard-tile dashboard-tile-link",
                TileCard { tile }
            }
        },
        None => rsx! {
            div { class: "dashboard-tile",
                TileCard { tile }
            }
        },
    }
}

#[component]
fn TileCard(tile: DashboardTile) -> Element {
    let icon = match tile {
        DashboardTile::CreateOrder => rsx! { Icon::<LdPlus> { icon: LdPlus, width: 24, height: 24 } },
        DashboardTile::ViewOrders => {
            rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 24, height: 24 } }
        }
        DashboardTile::ManageUsers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
    };

    rsx! {
        IconStat {
            accent: tile.accent().to_string(),
            label: tile.title().to_string(),
            value: tile.subtitle().to_string(),
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::UserRole;

    fn titles(user: &User) -> Vec<&'static str> {
        dashboard_tiles(user).iter().map(|t| t.title()).collect()
    }

    #[test]
    fn super_admin_sees_all_tiles_in_order() {
        let user = User::new("Alice", UserRole::SuperAdmin);
        assert_eq!(
            titles(&user),
            vec!["Create New Order", "View Orders", "Manage Users"]
        );
    }

    #[test]
    fn other_roles_only_see_view_orders() {
        for label in ["Staff", "Admin", "Viewer"] {
            let user = User::new("Bob", UserRole::from_label(label));
            assert_eq!(titles(&user), vec!["View Orders"], "role {label}");
        }
    }

    /// Renders the tile cards a user gets, without the router links around them.
    fn render_tiles(user: User) -> String {
        dioxus_ssr::render_element(rsx! {
            for tile in dashboard_tiles(&user) {
                TileCard { key: "{tile:?}", tile }
            }
        })
    }

    #[test]
    fn staff_tiles_render_without_admin_actions() {
        let html = render_tiles(User::new("Sam", UserRole::from_label("Staff")));
        assert!(html.contains("View Orders"), "{html}");
        assert!(html.contains("Manage existing orders"), "{html}");
        assert!(!html.contains("Create New Order"), "{html}");
        assert!(!html.contains("Manage Users"), "{html}");
    }

    #[test]
    fn super_admin_tiles_render_in_order() {
        let html = render_tiles(User::new("Alice", UserRole::SuperAdmin));
        let create = html.find("Create New Order").unwrap();
        let view = html.find("View Orders").unwrap();
        let manage = html.find("Manage Users").unwrap();
        assert!(create < view && view < manage, "{html}");
        assert!(html.contains("Coming soon"), "{html}");
    }

    #[test]
    fn manage_users_tile_is_not_a_link() {
        let html = dioxus_ssr::render_element(rsx! {
            ActionTile { tile: DashboardTile::ManageUsers }
        });
        assert!(html.contains("Manage Users"), "{html}");
        assert!(!html.contains("<a"), "{html}");
    }

    #[test]
    fn manage_users_is_a_stub() {
        assert_eq!(DashboardTile::ManageUsers.subtitle(), "Coming soon");
        assert_eq!(DashboardTile::ManageUsers.target(), None);
    }

    #[test]
    fn tiles_link_to_order_routes() {
        assert_eq!(DashboardTile::CreateOrder.target(), Some(Route::NewOrder {}));
        assert_eq!(DashboardTile::ViewOrders.target(), Some(Route::OrderList {}));
    }
}
