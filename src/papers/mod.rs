//! Paper collection loading, filtering and card projection.
//!
//! The collection is a JSON array retrieved once from a static location.
//! Everything downstream of the load operates on the in-memory slice:
//! [`PaperFilter`] narrows it and [`PaperCard`] projects each record into
//! the text a card displays.

pub mod card;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod source;

pub use card::{PaperCard, calendar_date, strip_boundary_escapes};
pub use filter::PaperFilter;
pub use gateway::{FilePaperGateway, HttpPaperGateway, PaperGateway, gateway_for};
pub use models::PaperRecord;
pub use source::DataSource;

#[cfg(test)]
pub use gateway::MockPaperGateway;
