pub mod home_handlers;
