// Form controls
pub mod button;
pub mod form_select;
pub mod input;

// Content
pub mod badge;
pub mod card;
pub mod detail_list;
pub mod page_header;

// Chrome
pub mod modal;
pub mod navbar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use form_select::*;
pub use input::*;
pub use modal::*;
pub use navbar::*;
pub use page_header::*;
