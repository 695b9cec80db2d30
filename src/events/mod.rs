pub mod controls;
pub mod pointer;

pub use controls::{sync_button_states, wire_controls};
pub use pointer::wire_orbit_input;
