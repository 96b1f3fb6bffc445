pub mod dashboard;
pub mod login;
pub mod menu;
pub mod profile;
pub mod register;
pub mod reset_password;

pub use dashboard::DashboardView;
pub use login::LoginView;
pub use menu::MenuView;
pub use profile::ProfileView;
pub use register::RegisterView;
pub use reset_password::ResetPasswordView;
