pub mod events;
pub mod injector;
pub mod radio;
pub mod select;
pub mod text;
