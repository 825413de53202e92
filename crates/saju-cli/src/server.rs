use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use saju_calendar::SexagenaryCalendar;
use saju_core::{
    BirthInput, CivilDate, Direction, FortunePeriod, PropertyFeatures, SajuEngine, SajuProfile,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The engine is immutable after startup, so handlers share it without a
/// lock.
#[derive(Clone)]
pub struct SajuServer {
    engine: Arc<SajuEngine<SexagenaryCalendar>>,
    /// Offset of the clock that decides "today" for fortunes without a date.
    utc_offset_minutes: i32,
    tool_router: ToolRouter<Self>,
}

impl SajuServer {
    pub fn new(engine: SajuEngine<SexagenaryCalendar>, utc_offset_minutes: i32) -> Self {
        Self {
            engine: Arc::new(engine),
            utc_offset_minutes,
            tool_router: Self::tool_router(),
        }
    }

    fn profile(&self, birth: &BirthRequest) -> Result<SajuProfile, McpError> {
        let input = BirthInput::parse(&birth.date, birth.time.as_deref(), birth.lunar)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(self.engine.profile(&input))
    }
}

fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct BirthRequest {
    /// Birth date as YYYY-MM-DD
    date: String,
    /// Birth time as HH:MM (24-hour). Omit when unknown.
    time: Option<String>,
    /// True when `date` is a lunar calendar date
    #[serde(default)]
    lunar: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FortuneRequest {
    #[serde(flatten)]
    birth: BirthRequest,
    /// "daily", "monthly" or "yearly"
    period: String,
    /// Date the period is taken from, YYYY-MM-DD. Defaults to today on the
    /// server's configured clock (UTC unless set).
    on: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ScoreRequest {
    #[serde(flatten)]
    birth: BirthRequest,
    /// Property facing: english name or abbreviation (south, NE) or Korean (남향)
    direction: Option<String>,
    /// Floor number
    floor: Option<i32>,
}

#[tool_router]
impl SajuServer {
    #[tool(
        description = "Compute a Saju birth chart: the four pillars (year, month, day, hour), the Day Master, element counts with dominant and lacking elements, Ten-God and Twelve-Stage classifications for each position, and Spirit markers. Unknown birth times fall back to the configured default hour."
    )]
    async fn saju_profile(
        &self,
        Parameters(req): Parameters<BirthRequest>,
    ) -> Result<CallToolResult, McpError> {
        let profile = self.profile(&req)?;
        let result = serde_json::json!({
            "pillars": profile.pillars().to_string(),
            "profile": profile,
        });
        Ok(json_result(&result))
    }

    #[tool(
        description = "Fortune for a day, month or year: the period's heavenly stem is classified against the Day Master and the resulting Ten-God selects a score, title and reading."
    )]
    async fn saju_fortune(
        &self,
        Parameters(req): Parameters<FortuneRequest>,
    ) -> Result<CallToolResult, McpError> {
        let period = FortunePeriod::from_str_lossy(&req.period).ok_or_else(|| {
            McpError::invalid_params(
                format!("period must be daily, monthly or yearly, got '{}'", req.period),
                None,
            )
        })?;
        let on = match req.on.as_deref() {
            Some(s) => s
                .parse::<CivilDate>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?,
            None => CivilDate::today_at_offset(self.utc_offset_minutes),
        };
        let profile = self.profile(&req.birth)?;
        Ok(json_result(&self.engine.fortune(&profile, period, on)))
    }

    #[tool(
        description = "Health advice keyed by the chart's lacking element: the associated organs, lifestyle advice and foods."
    )]
    async fn saju_health(
        &self,
        Parameters(req): Parameters<BirthRequest>,
    ) -> Result<CallToolResult, McpError> {
        let profile = self.profile(&req)?;
        Ok(json_result(&self.engine.health(&profile)))
    }

    #[tool(
        description = "Score a property (0-100) against the birth chart from its facing direction and floor number. Returns a comment, the lucky direction and investment, styling and location advice."
    )]
    async fn saju_score(
        &self,
        Parameters(req): Parameters<ScoreRequest>,
    ) -> Result<CallToolResult, McpError> {
        let direction = req
            .direction
            .as_deref()
            .map(str::parse::<Direction>)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let profile = self.profile(&req.birth)?;
        let features = PropertyFeatures {
            direction,
            floor: req.floor,
        };
        Ok(json_result(&self.engine.score(&profile, &features)))
    }
}

#[tool_handler]
impl ServerHandler for SajuServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Saju (four pillars) birth-chart readings.\n\n\
                 Every tool takes a birth `date` (YYYY-MM-DD), an optional `time` (HH:MM) \
                 and `lunar` when the date is on the lunar calendar.\n\
                 - saju_profile: the chart itself.\n\
                 - saju_fortune: daily, monthly or yearly fortune.\n\
                 - saju_health: health advice for the lacking element.\n\
                 - saju_score: property compatibility from facing and floor."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
