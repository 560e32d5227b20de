pub mod complete;
pub mod index;
pub mod process;
pub mod save;
pub mod split;
