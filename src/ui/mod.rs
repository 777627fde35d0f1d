// SPDX-License-Identifier: MPL-2.0
//! Framework-agnostic UI components.

pub mod lightbox;
