//! # qrdesk
//!
//! A small desktop utility that turns text into a QR code, shows it, and saves
//! it as a PNG or copies it to the clipboard.
//!
//! The crate is split the way the window is wired:
//!
//! - [`generator::QrGenerator`] encodes text and keeps the last [`EncodedSymbol`].
//! - [`view::Presentation`] is the surface that displays symbols and notices.
//! - [`controller::Controller`] turns user [`view::Intent`]s into generator calls.
//!
//! QR encoding itself is delegated to the [`qrcode`] crate; rasterization and
//! PNG output use [`image`].
//!
//! ## Example
//!
//! Generate a code in memory and write it to disk:
//!
//! ```rust
//! use qrdesk::generator::QrGenerator;
//!
//! let dir = std::env::temp_dir();
//! let path = dir.join("qrdesk-doc-example.png");
//!
//! let mut generator = QrGenerator::new();
//! generator.generate("Hello, World!").unwrap();
//! generator.persist(Some(&path)).unwrap();
//! # std::fs::remove_file(&path).ok();
//! ```
//!
//! ## Modules
//!
//! - [`generator`]: QR generation and PNG persistence.
//! - [`helper`]: Rendering parameters and raster utilities.
//! - [`controller`]: Intent handling.
//! - [`view`]: The presentation contract and user-facing text.
//! - [`clipboard`]: Clipboard capability with native and no-op writers.
//! - [`launcher`]: Opening pages in the default browser.
//! - `gui`: The eframe window (feature `gui`).

pub mod clipboard;
pub mod controller;
pub mod error;
pub mod generator;
#[cfg(feature = "gui")]
pub mod gui;
pub mod helper;
pub mod launcher;
pub mod logging;
pub mod symbol;
pub mod view;

pub use error::{Error, Result};
pub use symbol::EncodedSymbol;
