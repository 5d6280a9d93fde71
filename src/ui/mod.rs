//! Leptos components and the browser drivers behind them

pub mod common;
pub mod hooks;
pub mod icon;
pub mod pages;
pub mod sections;
#[cfg(not(feature = "ssr"))]
pub mod transport;

pub use icon::{Icon, icons};
