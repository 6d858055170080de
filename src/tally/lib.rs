pub mod content;
pub mod counter;
pub mod mount;
