//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod footer;
mod initiative_card;
mod initiative_form;
mod navbar;
mod search_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use initiative_card::InitiativeCard;
pub use initiative_form::InitiativeForm;
pub use navbar::Navbar;
pub use search_bar::SearchBar;
