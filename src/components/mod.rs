//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod bindings;
mod cards;
mod player;
mod sidebar;
mod view_model;

pub use app::*;
pub use app_view::*;
pub use bindings::*;
pub use cards::*;
pub use player::*;
pub use sidebar::*;
pub use view_model::*;
