// Module exports for services

pub mod bucket;
pub mod dragdrop;
pub mod indicator;
pub mod planner;
pub mod store;
pub mod week;
