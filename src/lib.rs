// Portfolio library - exposes the session, menu and storage layers for the binary and tests

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod services;
pub mod view;
