//! Cash-value projector for investment-linked illustrations

mod engine;
mod irr;
mod schedule;
mod state;

pub use engine::{
    ProjectionConfig, ProjectionEngine, DEFAULT_ANNUAL_ADMIN_FEE, DEFAULT_INTEREST_RATE,
    HIGH_INTEREST_RATE, MAX_PROJECTION_YEARS, SURRENDER_PENALTY_YEARS, TERMINAL_AGE,
};
pub use irr::{calculate_irr, surrender_yield};
pub use schedule::{ProjectionResult, ProjectionSummary, YearProjection};
pub use state::ProjectionState;
