pub mod completions;
pub mod install;
pub mod self_update;
