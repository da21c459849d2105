//! View models for the SoupMate page.
//!
//! Each component owns its display state and renders it to plain text;
//! components that talk to the backend get an `ApiService` handed in.

pub mod app;
pub mod header;
pub mod home;
pub mod searchbar;
pub mod sidenav;
pub mod signal;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{App, Command, Flow, Route};
pub use header::HeaderComponent;
pub use home::HomeComponent;
pub use searchbar::{ANSWER_ERROR, SearchState, SearchTicket, SearchbarComponent};
pub use sidenav::SidenavComponent;
pub use signal::Signal;
