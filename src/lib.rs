pub mod cli;
pub mod guardian;
