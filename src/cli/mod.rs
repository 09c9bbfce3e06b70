//! CLI operation mode handlers.
//!
//! - [`browse_tui`]: Interactive card browser
//! - [`print`]: Load, filter and write the matching papers to stdout
//!
//! Output formatting utilities are in [`output`].

pub mod browse_tui;
pub mod output;
pub mod print;
