//! # JJRicks Core Library
//!
//! Core logic behind the JJRicks site pages. The CLI (and any other host)
//! is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Color**: validation of free-form hex / RGB text into a canonical
//!   [`ColorSpec`], rendered back as `#RRGGBB` and `rgb(R, G, B)`
//! - **Timer**: a study/break countdown state machine that requires the
//!   caller to invoke `tick()` once per second, plus a [`Ticker`] that owns
//!   that schedule
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`resolve_input`]: Top-level color form entry point
//! - [`IntervalTimer`]: Study/break state machine
//! - [`Config`]: Application configuration management

pub mod color;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use color::{normalize_hex, parse_rgb, render, resolve_input, ColorSpec, RenderedColor, RgbInput};
pub use error::{Channel, ConfigError, CoreError, DurationField, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{format_mm_ss, Durations, IntervalTimer, Mode, Ticker, TimerState};
