pub mod artifacts;
pub mod completions;
pub mod users;
