pub mod customer;
pub mod menu;
pub mod user;

pub use customer::{with_server_points, Customer};
pub use menu::{affordable_items, MenuItem, MenuItemPayload};
pub use user::UserProfile;
