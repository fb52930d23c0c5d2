use team::{Team, TeamId, UserId, PlayTime};

use ::errors::*;

use std::collections::HashMap;

/// In-memory book of every team, keyed by id.
///
/// Enforces the pairing rules the ladder relies on: two different players per team, no team
/// formed twice from the same pair, and no player attending with more than one team.
#[derive(Debug, Default)]
pub struct TeamRegistry
{
    teams: HashMap<TeamId, Team>,
}

impl TeamRegistry
{
    pub fn new() -> TeamRegistry
    {
        TeamRegistry::default()
    }

    pub fn create(&mut self, first_player: UserId, second_player: UserId) -> Result<Team>
    {
        let team = Team::new(TeamId::generate(), first_player, second_player)?;
        self.insert(team.clone())?;

        Ok(team)
    }

    /// Adds a team loaded from elsewhere, keeping its id.
    pub fn insert(&mut self, team: Team) -> Result<()>
    {
        if self.is_existing_team(team.first_player(), team.second_player())
        {
            bail!(ErrorKind::ExistingTeam(team.first_player().clone(), team.second_player().clone()));
        }
        if self.teams.contains_key(team.id())
        {
            bail!(ErrorKind::DuplicateTeam(team.id().clone()));
        }

        if team.is_attending()
        {
            self.check_for_active_team(&team)?;
        }

        debug!("Registered team: {}", team);
        self.teams.insert(team.id().clone(), team);

        Ok(())
    }

    pub fn get(&self, team_id: &TeamId) -> Option<&Team>
    {
        self.teams.get(team_id)
    }

    pub fn remove(&mut self, team_id: &TeamId) -> Result<Team>
    {
        self.teams.remove(team_id)
            .ok_or_else(|| ErrorKind::TeamNotFound(team_id.clone()).into())
    }

    pub fn len(&self) -> usize
    {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.teams.is_empty()
    }

    pub fn update_attendance(&mut self, team_id: &TeamId, play_time: PlayTime) -> Result<&Team>
    {
        let current = self.teams.get(team_id)
            .ok_or_else(|| Error::from(ErrorKind::TeamNotFound(team_id.clone())))?;
        if play_time.is_playable()
        {
            self.check_for_active_team(current)?;
        }

        let team = self.teams.get_mut(team_id)
            .ok_or_else(|| Error::from(ErrorKind::TeamNotFound(team_id.clone())))?;
        team.play_time = play_time;

        trace!("Team: {} now plays at {}", team_id, play_time);
        Ok(&*team)
    }

    /// Snapshot of every team's play time, handed to the ladder for a cycle.
    pub fn attendance(&self) -> HashMap<TeamId, PlayTime>
    {
        self.teams.iter()
            .map(|(id, team)| (id.clone(), team.play_time))
            .collect()
    }

    fn is_existing_team(&self, first_player: &UserId, second_player: &UserId) -> bool
    {
        self.teams.values()
            .any(|team| team.has_player(first_player) && team.has_player(second_player))
    }

    /// Fails if either player of `team` is already attending with a different team.
    fn check_for_active_team(&self, team: &Team) -> Result<()>
    {
        for player in [team.first_player(), team.second_player()].iter()
        {
            if let Some(active) = self.find_active_team(player)
            {
                if active.id() != team.id()
                {
                    bail!(ErrorKind::MultiplePlayTime((*player).clone(), active.id().clone()));
                }
            }
        }

        Ok(())
    }

    fn find_active_team(&self, player: &UserId) -> Option<&Team>
    {
        self.teams.values()
            .find(|team| team.has_player(player) && team.is_attending())
    }
}
