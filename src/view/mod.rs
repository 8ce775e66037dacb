//! Rendering. Everything here is a pure function of app state.

pub mod animation;
pub mod banner;
pub mod menu;
pub mod plain;
pub mod screens;
pub mod sections;
pub mod theme;
