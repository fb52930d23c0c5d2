use game::MatchGroup;
use game::score::{ScoringRule, RankingStrategy, Standing};
use team::TeamId;

use uuid::Uuid;

use ::errors::*;

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

const FIRST_ROUND: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct ScoreCardId(String);

impl ScoreCardId
{
    pub fn generate() -> ScoreCardId
    {
        ScoreCardId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ScoreCardId
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// Who won each round of one match group's night.
///
/// Winners are recorded one round at a time. Once every round has a winner the card is
/// finished: nothing more can be recorded and the ranked results become available.
/// A stored card is replayed round by round when it is read back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "ScoreCardRecord")]
pub struct ScoreCard
{
    id: ScoreCardId,
    match_group: MatchGroup,
    rule: ScoringRule,
    strategy: RankingStrategy,
    round_winners: BTreeMap<u32, TeamId>,
    current_round: u32,
}

#[derive(Deserialize)]
struct ScoreCardRecord
{
    id: ScoreCardId,
    match_group: MatchGroup,
    rule: ScoringRule,
    strategy: RankingStrategy,
    round_winners: BTreeMap<u32, TeamId>,
    current_round: u32,
}

impl TryFrom<ScoreCardRecord> for ScoreCard
{
    type Error = Error;

    fn try_from(record: ScoreCardRecord) -> Result<ScoreCard>
    {
        let mut card = ScoreCard::new(record.match_group, record.rule)?
            .with_strategy(record.strategy);
        card.id = record.id;

        for (round, winner) in record.round_winners.iter()
        {
            if *round != card.current_round
            {
                bail!("Match group: {} has a winner for round {} but expected round {}", card.match_group.id(), round, card.current_round);
            }

            card.record_round_winner(winner)?;
        }

        if record.current_round != card.current_round
        {
            bail!("Match group: {} is at round {} after {} recorded rounds", card.match_group.id(), record.current_round, card.recorded_rounds());
        }

        Ok(card)
    }
}

impl ScoreCard
{
    pub fn new(match_group: MatchGroup, rule: ScoringRule) -> Result<ScoreCard>
    {
        if match_group.len() != rule.group_size
        {
            bail!(ErrorKind::InvalidGroupSize(match_group.id().clone(), match_group.len(), rule.group_size));
        }

        Ok(
            ScoreCard {
                id: ScoreCardId::generate(),
                match_group,
                rule,
                strategy: RankingStrategy::default(),
                round_winners: BTreeMap::new(),
                current_round: FIRST_ROUND,
            }
        )
    }

    /// Picks the rule from the group's size.
    pub fn for_group(match_group: MatchGroup) -> Result<ScoreCard>
    {
        match ScoringRule::for_group_size(match_group.len())
        {
            Some(rule) => ScoreCard::new(match_group, rule),
            None => bail!(ErrorKind::InvalidGroupSize(match_group.id().clone(), match_group.len(), ::game::FOUR_TEAM_RULE.group_size)),
        }
    }

    pub fn with_strategy(mut self, strategy: RankingStrategy) -> ScoreCard
    {
        self.strategy = strategy;
        self
    }

    pub fn id(&self) -> &ScoreCardId
    {
        &self.id
    }

    pub fn match_group(&self) -> &MatchGroup
    {
        &self.match_group
    }

    pub fn rule(&self) -> ScoringRule
    {
        self.rule
    }

    pub fn strategy(&self) -> RankingStrategy
    {
        self.strategy
    }

    pub fn current_round(&self) -> u32
    {
        self.current_round
    }

    pub fn round_winners(&self) -> &BTreeMap<u32, TeamId>
    {
        &self.round_winners
    }

    pub fn recorded_rounds(&self) -> u32
    {
        self.current_round.saturating_sub(FIRST_ROUND)
    }

    pub fn rounds_remaining(&self) -> u32
    {
        self.rule.rounds.saturating_sub(self.recorded_rounds())
    }

    pub fn is_complete(&self) -> bool
    {
        self.rounds_remaining() == 0
    }

    pub fn record_round_winner(&mut self, team: &TeamId) -> Result<()>
    {
        if !self.match_group.contains(team)
        {
            bail!(ErrorKind::TeamNotInGroup(team.clone(), self.match_group.id().clone()));
        }
        if self.is_complete()
        {
            bail!(ErrorKind::RoundsComplete(self.match_group.id().clone(), self.rule.rounds));
        }

        trace!("Match group: {} round {} won by {}", self.match_group.id(), self.current_round, team);

        self.round_winners.insert(self.current_round, team.clone());
        self.current_round += 1;

        Ok(())
    }

    pub fn wins_for(&self, team: &TeamId) -> u32
    {
        self.round_winners.values()
            .filter(|winner| *winner == team)
            .count() as u32
    }

    /// The first team to reach the rule's win threshold, which can happen before the last round.
    pub fn group_winner(&self) -> Option<&TeamId>
    {
        let mut wins: Vec<(&TeamId, u32)> = Vec::with_capacity(self.match_group.len());

        for winner in self.round_winners.values()
        {
            let count = match wins.iter_mut().find(|entry| entry.0 == winner)
            {
                Some(entry) =>
                {
                    entry.1 += 1;
                    entry.1
                },
                None =>
                {
                    wins.push((winner, 1));
                    1
                },
            };

            if count >= self.rule.win_threshold
            {
                return Some(winner);
            }
        }

        None
    }

    /// Final table for the group. Fails until every round has a winner.
    pub fn standings(&self) -> Result<Vec<Standing>>
    {
        if !self.is_complete()
        {
            bail!(ErrorKind::RoundsIncomplete(self.match_group.id().clone(), self.recorded_rounds(), self.rule.rounds));
        }

        Ok(self.strategy.rank(self.match_group.teams(), &self.round_winners))
    }

    pub fn ranked_results(&self) -> Result<Vec<TeamId>>
    {
        Ok(self.standings()?
            .into_iter()
            .map(|standing| standing.team)
            .collect())
    }
}
