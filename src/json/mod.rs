//! Purpose: Internal JSON parsing boundary shared by the ABI surface.
//! Exports: `parse` module with decode helpers used by binding internals.
//! Role: Single seam for parser usage so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
