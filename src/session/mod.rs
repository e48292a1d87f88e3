pub mod current;
pub mod gate;
pub mod notice;
pub mod storage;
pub mod store;
