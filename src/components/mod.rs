pub mod confirmation_modal;
pub mod navbar;
pub mod points_modal;
pub mod protected_route;

pub use confirmation_modal::ConfirmationModal;
pub use navbar::Navbar;
pub use points_modal::PointsModal;
pub use protected_route::{evaluate, GuardDecision, ProtectedRoute};
