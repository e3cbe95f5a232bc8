pub mod report;
pub mod returns;
