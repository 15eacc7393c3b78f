pub mod goal;
pub mod history;
pub mod logging;
pub mod query;
pub mod status;
pub mod streak;
