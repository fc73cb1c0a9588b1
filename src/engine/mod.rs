pub mod hasher;
pub(crate) mod mix;
pub mod state;
