//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `bill_form`: The bill form with its dynamic rows

mod bill_form;
mod field_renderer;

pub use bill_form::draw as draw_bill_form;
