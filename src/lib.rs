pub mod cli;
pub mod config;
pub mod misc;
pub mod model;
pub mod service;
