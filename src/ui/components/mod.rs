//! UI Components
//!
//! GTK4 widgets for the signup/login window.
//!
//! # Components
//!
//! - `form_switcher.rs` - Signup/Login toggle pair
//! - `signup_form.rs` - Full name, email, password + submit
//! - `login_form.rs` - Email, password + submit
//! - `auth_panel.rs` - All of the above; the Controller's view

mod auth_panel;
mod form_switcher;
mod login_form;
mod signup_form;

pub use auth_panel::AuthPanel;
pub use form_switcher::FormSwitcher;
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
