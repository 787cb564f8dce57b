pub mod event;
pub mod sink;
