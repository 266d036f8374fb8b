pub mod catalog;
pub mod echo;
pub mod recommendations;
