pub mod completions;
pub mod end;
pub mod goal;
pub mod history;
pub mod log;
pub mod show;
pub mod status;
