pub mod debounce;
pub mod reveal;
pub mod scroll;
