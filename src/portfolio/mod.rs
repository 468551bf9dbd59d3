// SPDX-License-Identifier: MPL-2.0
//! Project cards and the tag filter that shows or hides them.

pub mod filter;

pub use filter::{FilterBar, FilterButton, ProjectCard, TagFilter};
