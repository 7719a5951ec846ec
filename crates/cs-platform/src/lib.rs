//! # cs-platform
//!
//! Operating-system integrations for clipstash. Currently the system
//! clipboard, implemented on top of `clipboard-rs`.

pub mod clipboard;

pub use clipboard::LocalClipboard;
