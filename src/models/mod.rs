// Module exports for models

pub mod day_cell;
pub mod error;
pub mod event;
pub mod settings;
