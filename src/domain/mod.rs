pub mod catalog;
pub mod sentiment;
pub mod session;
pub mod speech;
pub mod summary;
