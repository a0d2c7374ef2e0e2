// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Utility helpers shared by the demo binary.

pub mod logging;

pub use logging::init_logging;
