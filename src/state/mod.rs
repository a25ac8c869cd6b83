//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`query`, `documents`, `ocr`, `plan`) so each
//! component depends on one small focused model. Every panel cycles through
//! idle, loading, and settled; the transition methods here flip the loading
//! flag synchronously so a panel can never have two requests in flight.

pub mod documents;
pub mod ocr;
pub mod plan;
pub mod query;
pub mod ui;
