pub mod catalog;
pub mod description;
