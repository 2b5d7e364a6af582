//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `sign_up_form`: Sign-up form with action panel

mod field_renderer;
mod sign_up_form;

pub use sign_up_form::draw as draw_sign_up;
