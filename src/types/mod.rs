// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource identifiers and the rows printed by the listers.

pub mod group_version;
pub mod resource;

pub use group_version::GroupVersion;
pub use resource::{PodRow, ResourceId};
