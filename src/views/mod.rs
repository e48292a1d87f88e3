//! HTML rendering. Every function returns a complete document or fragment as a
//! `String`; all dynamic text goes through [`layout::escape`].

pub mod assignment;
pub mod dashboard;
pub mod layout;
pub mod login;
pub mod resource;
