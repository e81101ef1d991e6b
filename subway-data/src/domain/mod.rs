//! Domain types for the subway route/stop dataset.
//!
//! These are the shapes the generated artifacts are made of. A `Stop` is
//! created once per stop ID from its agency name; a `Route` owns the
//! ordered stops of one line. Transfers are the only part filled in after
//! construction.

mod direction;
mod route;
mod route_table;

pub use direction::{Direction, split_stop_id};
pub use route::{Route, Stop, Synonym, Transfer};
pub use route_table::{RouteTable, RouteTableError, Terminals};
