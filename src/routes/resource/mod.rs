pub mod resource_handlers;
pub mod resource_models;
