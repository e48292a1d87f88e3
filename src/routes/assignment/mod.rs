pub mod assignment_handlers;
pub mod assignment_models;
