use game::{MatchGroup, MatchGroupId, ScoreBoard, ScoreCard};
use game::{FOUR_TEAM_RULE, THREE_TEAM_RULE};
use ladder::Ladder;
use team::{TeamId, PlayTime};

use ::errors::*;

use std::collections::HashMap;

/// The night's groups plus whoever could not be fitted into one.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchmaking
{
    pub groups: Vec<MatchGroup>,
    pub unassigned: Vec<TeamId>,
}

impl Matchmaking
{
    /// One fresh score card per group, top of the ladder first.
    pub fn score_board(&self) -> Result<ScoreBoard>
    {
        let mut board = ScoreBoard::new();
        for group in self.groups.iter()
        {
            board.add(ScoreCard::for_group(group.clone())?)?;
        }

        Ok(board)
    }
}

/// Cuts the attending teams into groups, walking down the ladder.
///
/// Groups hold 4 teams. When the attending count doesn't divide by 4 the bottom groups hold 3
/// instead, and if even that can't cover everyone (1, 2 or 5 teams) the lowest teams sit out.
pub fn form_match_groups(ladder: &Ladder, attendance: &HashMap<TeamId, PlayTime>) -> Result<Matchmaking>
{
    let attending: Vec<TeamId> = ladder.teams()
        .iter()
        .filter(|team| attendance.get(*team).cloned().unwrap_or_default().is_playable())
        .cloned()
        .collect();

    let (fours, threes) = group_counts(attending.len());
    let assigned = fours * FOUR_TEAM_RULE.group_size + threes * THREE_TEAM_RULE.group_size;

    let mut groups = Vec::with_capacity(fours + threes);
    let mut teams = attending.into_iter();

    for size in (0..fours).map(|_| FOUR_TEAM_RULE.group_size).chain((0..threes).map(|_| THREE_TEAM_RULE.group_size))
    {
        let members: Vec<TeamId> = teams.by_ref().take(size).collect();
        groups.push(MatchGroup::new(MatchGroupId::generate(), members)?);
    }

    let unassigned: Vec<TeamId> = teams.collect();
    if !unassigned.is_empty()
    {
        warn!("{} attending teams could not be placed in a match group: {:?}", unassigned.len(), unassigned);
    }

    debug!("Formed {} match groups for {} teams", groups.len(), assigned);

    Ok(
        Matchmaking {
            groups,
            unassigned,
        }
    )
}

/// # Return
/// * `.0` groups of four and `.1` groups of three
fn group_counts(attending: usize) -> (usize, usize)
{
    let four = FOUR_TEAM_RULE.group_size;
    let three = THREE_TEAM_RULE.group_size;

    let threes = (four - attending % four) % four;
    if threes * three > attending
    {
        return (attending / four, 0);
    }

    ((attending - threes * three) / four, threes)
}
