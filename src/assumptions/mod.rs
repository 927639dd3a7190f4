//! Illustration assumptions: front-load charges, bonuses and cost-of-insurance rates

mod bonus;
mod charges;
mod coi;
pub mod loader;

pub use bonus::{Bonus, BonusBasis, BonusSchedule};
pub use charges::InitialChargeSchedule;
pub use coi::{CoiBand, CoiRateTable};
pub use loader::LoadedAssumptions;
