use std::sync::Arc;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamIdentifier, TeamName};

use super::error::ActionResult;

/// Action to rename a team or change its identifier.
pub struct UpdateTeamAction {
    teams: Arc<dyn TeamRepository>,
}

impl UpdateTeamAction {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    #[tracing::instrument(name = "update_team", skip_all, fields(team_id = %team.id()), err)]
    pub async fn run(
        &self,
        mut team: Team,
        name: TeamName,
        identifier: TeamIdentifier,
    ) -> ActionResult<Team> {
        let event = team.rename(name, identifier);
        self.teams.save(&team).await?;
        event.record();

        Ok(team)
    }
}
