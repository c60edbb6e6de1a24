pub mod hasher;
pub mod strings;
