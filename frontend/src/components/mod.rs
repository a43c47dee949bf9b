pub mod cards;
pub mod common;
pub mod data_grid;
pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
