pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod metrics;
pub mod transport;
pub mod ui;
