// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod axis;
pub mod xy_error;

// Re-export.
pub use axis::*;
pub use xy_error::*;
