// Shift Planner Library
// Exports the scheduling engine modules for reuse and testing

pub mod models;
pub mod services;
pub mod utils;
