#![forbid(unsafe_code)]
//! Australians calendar : générateur de la table des jours fériés australiens.
//!
//! - Programmes annuels saisis à la main (aucun calcul de Pâques).
//! - Trois tableaux : fériés, jours ouvrés compensatoires, jours in lieu.
//! - Rendu en source Rust (JSON/CSV avec la feature `serde`).

pub mod arrangement;
pub mod emit;
pub mod model;
pub mod schedules;

pub use arrangement::{Arrangement, ArrangementError};
#[cfg(feature = "serde")]
pub use emit::{CsvRenderer, JsonRenderer};
pub use emit::{generate, write_atomic, Renderer, RustSource};
pub use model::{DateAssignment, DayType, Holiday};
pub use schedules::{supported_years, YearSchedule, SCHEDULES};
