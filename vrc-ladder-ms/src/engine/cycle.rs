use chrono::{DateTime, Utc};

use serde_json;

use vrc_ladder_common::errors::*;
use vrc_ladder_common::game::{MatchGroup, MatchGroupId, ScoreCard};
use vrc_ladder_common::ladder::{BatchEntry, GroupFailure, Ladder, LadderConfig, SharedLadder};
use vrc_ladder_common::team::{PlayTime, TeamId};

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

/// One court's night as reported by the caller: its teams in ladder order and each round's winner in round order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupResult
{
    pub match_group_id: MatchGroupId,
    pub teams: Vec<TeamId>,
    pub round_winners: Vec<TeamId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CycleRequest
{
    pub ladder: Vec<TeamId>,
    #[serde(default)]
    pub attendance: HashMap<TeamId, PlayTime>,
    #[serde(default)]
    pub groups: Vec<GroupResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct FailedGroup
{
    pub match_group_id: MatchGroupId,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CycleResponse
{
    pub ordering: Vec<TeamId>,
    pub failures: Vec<FailedGroup>,
    pub completed_at: DateTime<Utc>,
}

pub fn read_request(path: &str) -> Result<CycleRequest>
{
    let mut file = File::open(path)?;
    let mut raw = String::new();
    file.read_to_string(&mut raw)?;

    Ok(serde_json::from_str(&raw)?)
}

/// Replays a group's reported winners onto a fresh score card.
pub fn build_score_card(group: &GroupResult) -> Result<ScoreCard>
{
    let match_group = MatchGroup::new(group.match_group_id.clone(), group.teams.clone())?;
    let mut card = ScoreCard::for_group(match_group)?;

    for winner in group.round_winners.iter()
    {
        card.record_round_winner(winner)
            .chain_err(|| format!("Failed to replay round {} of match group: {}", card.current_round(), group.match_group_id))?;
    }

    Ok(card)
}

/// Runs one reordering cycle for `request` and describes the result.
///
/// Groups that can't be turned into a score card are reported as failures in their place in the batch.
pub fn run_cycle(config: LadderConfig, request: CycleRequest) -> Result<CycleResponse>
{
    if request.ladder.is_empty()
    {
        bail!("Cycle request has no teams on the ladder");
    }

    let ladder = SharedLadder::new(Ladder::from_teams(config, request.ladder)?);

    let mut cards = Vec::with_capacity(request.groups.len());
    for group in request.groups.iter()
    {
        cards.push((group.match_group_id.clone(), build_score_card(group)));
    }

    let batch = cards.iter().map(|&(ref group_id, ref card)| match *card
    {
        Ok(ref card) => BatchEntry::Card(card),
        Err(ref error) => BatchEntry::Rejected(GroupFailure::new(group_id.clone(), Error::from(describe(error)))),
    });

    let report = ladder.apply_batch(batch, &request.attendance)?;

    let failures = report.failures
        .into_iter()
        .map(|failure| FailedGroup::new(failure.match_group, describe(&failure.error)))
        .collect();

    Ok(
        CycleResponse {
            ordering: report.ordering,
            failures,
            completed_at: Utc::now(),
        }
    )
}

/// Error message followed by its causes.
fn describe(error: &Error) -> String
{
    error.iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<String>>()
        .join(": ")
}
