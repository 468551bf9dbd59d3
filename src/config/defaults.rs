// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! # Categories
//!
//! - **Files**: Settings file and directory naming
//! - **Preview**: Image click behavior
//! - **Window**: Default and minimum window size

// ==========================================================================
// File Defaults
// ==========================================================================

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
pub const APP_NAME: &str = "FolioLens";

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Clicking the preview image hands it to the system viewer.
pub const DEFAULT_OPEN_IMAGE_EXTERNALLY: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
