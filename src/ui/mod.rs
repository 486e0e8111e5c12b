pub mod banner;
pub mod charts;
pub mod dashboard;
pub mod panels;
pub mod tables;
