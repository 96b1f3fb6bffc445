pub mod notification;
pub mod validation;

pub use notification::points_notification;
pub use validation::normalized_email;
