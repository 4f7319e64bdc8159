// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod model;

pub mod background;
pub mod badge;
pub mod cart;
pub mod content;
pub mod port;
pub mod storage;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
