// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two component vectors over a bounded scalar kind. See [`XY`].

// Attach sources.
pub mod binary_op;
pub mod xy_arg;
pub mod xy_generic_ops;
pub mod xy_policy_methods;
pub mod xy_serde;
pub mod xy_struct;

// Re-export.
pub use binary_op::*;
pub use xy_arg::*;
pub use xy_struct::*;
