//! Console frontend for the Bookstack library system.
//!
//! Everything interactive lives here: numbered text menus, raw input
//! prompting, and the input validation rules. The registries and the
//! persistence gateway know nothing about any of it.

pub mod input;
pub mod menu;
pub mod validation;
