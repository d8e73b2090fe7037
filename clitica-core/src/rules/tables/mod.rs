//! Runtime tables for clitic rules
//!
//! Built once from configuration; lookups never allocate.

pub mod clitics;
pub mod gaps;

pub use clitics::CliticTable;
pub use gaps::GapTable;
