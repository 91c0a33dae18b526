//! Placeholder substitution for capture messages.

use crate::core::Team;

/// The values substituted into a capture message template.
///
/// `{points}` renders signed (negative for penalties), `{pointsAbs}` as
/// the magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureContext {
    capper: String,
    team_capping: &'static str,
    team_capped: &'static str,
    points: i64,
}

impl CaptureContext {
    /// Build a context for one capture.
    pub fn new(capper: impl Into<String>, capping: Team, capped: Team, points: i64) -> Self {
        Self {
            capper: capper.into(),
            team_capping: capping.name(),
            team_capped: capped.name(),
            points,
        }
    }

    /// Render `template` with every placeholder substituted.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{capper}", &self.capper)
            .replace("{teamCapping}", self.team_capping)
            .replace("{teamCapped}", self.team_capped)
            .replace("{points}", &self.points.to_string())
            .replace("{pointsAbs}", &self.points.abs().to_string())
    }
}
