//! Card printing data: the lookup seam to the card database.
//!
//! ## Key Types
//!
//! - `PrintingIndex`: batch lookup trait implemented by any card data source
//! - `CardPrintings`: in-memory name → sets mapping
//! - `PrintingSnapshot`: printings plus the legal-set universe, loadable
//!   from JSON or bincode

pub mod index;
pub mod snapshot;

pub use index::{CardPrintings, PrintingIndex};
pub use snapshot::{PrintingSnapshot, SnapshotError};
