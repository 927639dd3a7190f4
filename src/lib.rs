//! Financial Planner - goal funding calculators and cash-value illustrations
//!
//! This library provides:
//! - Retirement, education and income-protection funding plans
//! - Year-by-year account value illustrations for investment-linked policies
//! - Editable front-load, bonus and cost-of-insurance assumption tables
//! - Batch and multi-rate illustration runs

pub mod assumptions;
pub mod error;
pub mod goals;
pub mod policy;
pub mod projection;
pub mod scenario;
pub mod tvm;

// Re-export commonly used types
pub use error::{PlanningError, Result};
pub use goals::{calculate_plan, GoalRequest, GoalType, PlanResult};
pub use policy::IllustrationPolicy;
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, YearProjection};
pub use scenario::ScenarioRunner;
