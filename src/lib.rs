pub mod config;
pub mod gui;
pub mod labels;
pub mod speed;
