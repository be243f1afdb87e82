//! Pipeline stages for Markdown-to-PDF conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. point at a different rendering endpoint or
//! converter) without touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ remote ──▶ assemble ──▶ pdftool
//! (read md)  (HTTP)     (HTML doc)   (subprocess)
//! ```
//!
//! 1. [`input`]    — read the source Markdown file to a string
//! 2. [`remote`]   — POST the text to the rendering endpoint; the only stage
//!    with network I/O, and the only one that degrades instead of failing
//! 3. [`assemble`] — wrap the fragment in the full document chrome and stage
//!    it to disk
//! 4. [`pdftool`]  — drive the external converter and clean up the staged file

pub mod assemble;
pub mod input;
pub mod pdftool;
pub mod remote;
