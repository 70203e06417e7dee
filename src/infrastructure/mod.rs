pub mod time;
pub mod wikimedia;
