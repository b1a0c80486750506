//! Pipeline stages for markdown-to-HTML/PDF conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different PDF engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ markdown ──▶ pdf
//! (path)    (CommonMark)  (wkhtmltopdf)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path and derive output names
//! 2. [`markdown`] — parse CommonMark and emit HTML bytes; pure, no I/O
//! 3. [`pdf`]      — drive the external rendering engine; the only stage
//!    that spawns a process

pub mod input;
pub mod markdown;
pub mod pdf;
