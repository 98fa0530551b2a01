// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - classify: decides whether an href is internal, external or ignorable
// - http: probes URLs to see whether they are alive
// - html: extracts links from a page and probes a bounded prefix of them
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod classify;
mod html;
mod http;

pub use classify::{classify, LinkKind};
pub use html::{analyze_links, extract_links, BrokenLink, LinkSet};
pub use http::{probe, probe_all, ProbeOutcome};
