pub mod archive;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod fs_utils;
pub mod pack;
