//! The widget engine: tokenizing and matching stakeholder text, evaluating
//! bridging themes, and laying nodes out on a 2D surface.
//!
//! Nothing in here touches the DOM; the components own these state objects
//! and render whatever they derive.

pub mod explorer;
pub mod layout;
pub mod map;
pub mod matcher;
pub mod model;
pub mod scenarios;
pub mod text;
