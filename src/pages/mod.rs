//! Pages
//!
//! One component per `View`.

mod account;
mod create_initiative;
mod initiatives;
mod login;
mod register;

pub use account::AccountPage;
pub use create_initiative::CreateInitiativePage;
pub use initiatives::InitiativesPage;
pub use login::LoginPage;
pub use register::RegisterPage;

pub(crate) const DELETE_PROMPT: &str = "Delete this initiative? This cannot be undone.";
