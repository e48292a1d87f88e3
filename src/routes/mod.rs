pub mod assignment;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod resource;
pub mod routes;
pub mod screen;
