pub mod history_store;
pub mod search_controller;
pub mod session;
