// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes
//! borrowed state and returns an `Element` producing [`crate::app::Message`]s.
//!
//! # Screens
//!
//! - [`grid`] - Scrollable justified thumbnail grid
//! - [`lightbox`] - Modal large-image viewer
//! - [`toolbar`] - Sort selector and status line
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)

pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod styles;
pub mod toolbar;
