pub mod config;
pub mod logging;

pub mod builder;
pub mod fs_util;
pub mod home;
pub mod layout;
pub mod paths;
pub mod prune;
pub mod scan;
