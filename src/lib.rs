//! SoftSell landing page: marketing sections, a quote request form and a
//! chat assistant backed by Gemini.

pub mod ai;
pub mod chat;
pub mod config;
pub mod content;
pub mod lead;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
