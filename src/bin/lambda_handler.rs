//! AWS Lambda handler exposing goal plans and illustrations as JSON
//!
//! Request examples:
//! `{"action": "plan", "goal": {"goal_type": "protection", "annual_income": 240000000, ...}}`
//! `{"action": "project", "policy": {"current_age": 30, ...}, "interest_rate": 0.05}`
//! `{"action": "compare", "policy": {...}, "config": {"admin_fee": 360000}}`

use chrono::{DateTime, Utc};
use financial_planner::{
    calculate_plan,
    projection::{ProjectionSummary, YearProjection},
    GoalRequest, IllustrationPolicy, PlanResult, ProjectionConfig, ProjectionResult,
    ScenarioRunner,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input accepted by the handler
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlannerRequest {
    Plan {
        goal: GoalRequest,
    },
    Project {
        policy: IllustrationPolicy,
        /// Defaults to the config's standard preset
        #[serde(default)]
        interest_rate: Option<f64>,
        #[serde(default)]
        config: Option<ProjectionConfig>,
    },
    Compare {
        policy: IllustrationPolicy,
        #[serde(default)]
        config: Option<ProjectionConfig>,
    },
}

/// One illustration in the response
#[derive(Debug, Serialize)]
pub struct IllustrationOutput {
    pub summary: ProjectionSummary,
    pub rows: Vec<YearProjection>,
}

impl From<ProjectionResult> for IllustrationOutput {
    fn from(result: ProjectionResult) -> Self {
        Self {
            summary: result.summary(),
            rows: result.rows,
        }
    }
}

/// Output from the handler
#[derive(Debug, Serialize, Default)]
pub struct PlannerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub illustrations: Vec<IllustrationOutput>,
    pub generated_at: Option<DateTime<Utc>>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn respond(request: PlannerRequest) -> PlannerResponse {
    match request {
        PlannerRequest::Plan { goal } => PlannerResponse {
            plan: Some(calculate_plan(&goal)),
            ..Default::default()
        },
        PlannerRequest::Project {
            policy,
            interest_rate,
            config,
        } => {
            let runner = ScenarioRunner::with_config(config.unwrap_or_default());
            let rate = interest_rate.unwrap_or(runner.config().default_interest_rate);
            PlannerResponse {
                illustrations: vec![runner.run(&policy, rate).into()],
                ..Default::default()
            }
        }
        PlannerRequest::Compare { policy, config } => {
            let runner = ScenarioRunner::with_config(config.unwrap_or_default());
            let comparison = runner.run_presets(&policy);
            PlannerResponse {
                illustrations: vec![comparison.default_rate.into(), comparison.high_rate.into()],
                ..Default::default()
            }
        }
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<Value>) -> Result<PlannerResponse, Error> {
    let start = std::time::Instant::now();
    let (payload, _context) = event.into_parts();

    let mut response = match serde_json::from_value::<PlannerRequest>(payload) {
        Ok(request) => respond(request),
        Err(e) => {
            log::warn!("rejected request: {}", e);
            PlannerResponse {
                error: Some(format!("Invalid request: {}", e)),
                ..Default::default()
            }
        }
    };

    response.generated_at = Some(Utc::now());
    response.execution_time_ms = start.elapsed().as_millis() as u64;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_action() {
        let request: PlannerRequest = serde_json::from_value(json!({
            "action": "plan",
            "goal": {
                "goal_type": "protection",
                "annual_income": 240000000.0,
                "support_years": 10.0,
                "existing_cover": 500000000.0,
                "loans": 300000000.0,
                "emergency_fund": 100000000.0
            }
        }))
        .unwrap();

        let response = respond(request);
        assert_eq!(response.plan.unwrap().shortfall, 2_300_000_000.0);
        assert!(response.illustrations.is_empty());
    }

    #[test]
    fn test_compare_action_uses_presets() {
        let request: PlannerRequest = serde_json::from_value(json!({
            "action": "compare",
            "policy": {
                "current_age": 30,
                "annual_premium": 20000000.0,
                "sum_assured": 1000000000.0,
                "payment_term": 15
            }
        }))
        .unwrap();

        let response = respond(request);
        assert_eq!(response.illustrations.len(), 2);
        assert_eq!(response.illustrations[0].summary.interest_rate, 0.05);
        assert_eq!(response.illustrations[1].summary.interest_rate, 0.07);
    }

    #[test]
    fn test_project_action_with_rate() {
        let request: PlannerRequest = serde_json::from_value(json!({
            "action": "project",
            "policy": { "current_age": 30 },
            "interest_rate": 0.05
        }))
        .unwrap();

        let response = respond(request);
        assert_eq!(response.illustrations[0].rows.len(), 1);
        assert!(response.illustrations[0].summary.lapsed);
    }
}
