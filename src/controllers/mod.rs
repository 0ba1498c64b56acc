pub mod catalog;
pub mod health;
pub mod pages;
pub mod sentiment;
pub mod speech;
