pub mod table;

pub use table::{flatten_run, write_positions, write_positions_file, PositionRecord};
