pub mod card;
pub mod board;

pub use self::card::ScoreCard;
pub use self::card::ScoreCardId;
pub use self::board::ScoreBoard;

use team::TeamId;

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Shape of a match group's night: how many teams, how many rounds and how many wins take the group.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, new)]
pub struct ScoringRule
{
    pub group_size: usize,
    pub rounds: u32,
    pub win_threshold: u32,
}

/// Best of 3, first to 2 wins.
pub const FOUR_TEAM_RULE: ScoringRule = ScoringRule { group_size: 4, rounds: 3, win_threshold: 2 };

/// Round robin: 1 vs 2, 1 vs 3, 2 vs 3.
pub const THREE_TEAM_RULE: ScoringRule = ScoringRule { group_size: 3, rounds: 3, win_threshold: 2 };

impl ScoringRule
{
    pub fn for_group_size(group_size: usize) -> Option<ScoringRule>
    {
        match group_size
        {
            4 => Some(FOUR_TEAM_RULE),
            3 => Some(THREE_TEAM_RULE),
            _ => None,
        }
    }
}

/// A team's line in a group's final table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, new)]
pub struct Standing
{
    pub team: TeamId,
    pub wins: u32,
    /// Round number of the team's first win, if it won any.
    pub first_win: Option<u32>,
}

/// How a finished score card turns round winners into a ranking.
///
/// Both strategies rank by rounds won first. They differ only in how equal win counts are split.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RankingStrategy
{
    /// Ties go to whoever won their first round earliest, winless teams keep their seed order.
    MostWins,
    /// Ties keep the group's seed order.
    MostWinsThenSeed,
}

impl Default for RankingStrategy
{
    fn default() -> RankingStrategy
    {
        RankingStrategy::MostWins
    }
}

impl RankingStrategy
{
    /// # Arguments
    /// * `seeds` The group's teams in declaration order
    /// * `round_winners` Winner of each recorded round, keyed by round number
    ///
    /// # Return
    /// * Standings for every seeded team, best first
    pub fn rank(self, seeds: &[TeamId], round_winners: &BTreeMap<u32, TeamId>) -> Vec<Standing>
    {
        let mut standings: Vec<Standing> = seeds.iter()
            .map(|team| tally(team, round_winners))
            .collect();

        /* sort_by is stable so anything left Equal stays in seed order */
        match self
        {
            RankingStrategy::MostWins => standings.sort_by(|a, b| {
                b.wins.cmp(&a.wins)
                    .then_with(|| compare_first_win(a.first_win, b.first_win))
            }),
            RankingStrategy::MostWinsThenSeed => standings.sort_by(|a, b| b.wins.cmp(&a.wins)),
        }

        standings
    }
}

fn tally(team: &TeamId, round_winners: &BTreeMap<u32, TeamId>) -> Standing
{
    let mut wins = 0;
    let mut first_win = None;

    for (round, winner) in round_winners.iter()
    {
        if winner == team
        {
            wins += 1;
            if first_win.is_none()
            {
                first_win = Some(*round);
            }
        }
    }

    Standing::new(team.clone(), wins, first_win)
}

fn compare_first_win(a: Option<u32>, b: Option<u32>) -> Ordering
{
    match (a, b)
    {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
