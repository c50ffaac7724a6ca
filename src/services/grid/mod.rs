//! Date-grid generation for the month, week and year projections.
//!
//! Everything here is pure: the only input besides the calendar coordinates
//! is "today", which callers pass explicitly (or take from the local clock
//! through the convenience wrappers).

mod month;
mod week;
mod year;

pub use month::{build_month_grid, generate_month_grid, generate_month_grid_at, GRID_CELLS};
pub use week::week_dates;
pub use year::{year_overview, MiniCell, MiniMonth};
