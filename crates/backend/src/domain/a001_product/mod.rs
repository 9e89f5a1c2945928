pub mod catalog;
pub mod service;
