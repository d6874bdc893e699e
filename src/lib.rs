// Reusable library API — the CLI is a thin shell over these modules
pub mod board;
pub mod cell;
pub mod errors;
pub mod exploration;
pub mod graph;
pub mod log;
pub mod search;
