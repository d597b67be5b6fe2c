// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listers built on the dynamic and the typed REST client.

pub mod dynamic;
pub mod rest;

pub use dynamic::DynamicPodLister;
pub use rest::RestPodLister;

use crate::error::Result;
use crate::types::PodRow;
use std::io::Write;

/// Tab-separated pod table. `gap` is what follows the status column.
#[derive(Debug, Clone, Copy)]
pub struct PodTable {
    gap: &'static str,
}

impl PodTable {
    pub const DYNAMIC: PodTable = PodTable { gap: "\t\t" };
    pub const REST: PodTable = PodTable { gap: "\t" };

    pub fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "namespace\t status{} name", self.gap)?;
        Ok(())
    }

    pub fn write_rows<W: Write>(&self, out: &mut W, rows: &[PodRow]) -> Result<()> {
        for row in rows {
            writeln!(
                out,
                "{}\t {}{} {}",
                row.namespace, row.phase, self.gap, row.name
            )?;
        }
        Ok(())
    }
}
