// This file makes the screen modules available to the rest of the application.

pub mod client_directory;
pub mod deposit_history;
pub mod pending_deposits;
