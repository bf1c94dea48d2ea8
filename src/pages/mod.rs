pub mod dashboard;
pub mod inherit;
pub mod not_found;
pub mod receive;
