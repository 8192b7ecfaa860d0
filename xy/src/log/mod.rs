// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in [`tracing`] setup. The library itself only emits events: `trace!` when a
//! saturating policy moves a value, and `debug!` when a coercion or vector operation is
//! rejected. Binaries (like `xy_calc`) decide where those go.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
