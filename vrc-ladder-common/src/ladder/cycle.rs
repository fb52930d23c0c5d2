use game::{MatchGroupId, ScoreCard};
use ladder::Ladder;
use team::{TeamId, PlayTime};

use ::errors::*;

use std::cmp;
use std::collections::{HashMap, HashSet};

/// A match group whose results could not be applied, and why.
#[derive(Debug, new)]
pub struct GroupFailure
{
    pub match_group: MatchGroupId,
    pub error: Error,
}

/// Outcome of one reordering cycle: the new order top to bottom, plus the groups that were skipped.
#[derive(Debug)]
pub struct CycleReport
{
    pub ordering: Vec<TeamId>,
    pub failures: Vec<GroupFailure>,
}

impl CycleReport
{
    pub fn is_clean(&self) -> bool
    {
        self.failures.is_empty()
    }
}

/// One slot of a reordering batch.
///
/// A group the caller already knows is broken still holds its place in the batch, so the groups
/// either side of it are not treated as neighbours.
#[derive(Debug)]
pub enum BatchEntry<'a>
{
    Card(&'a ScoreCard),
    Rejected(GroupFailure),
}

impl Ladder
{
    /// Runs one full reordering cycle.
    ///
    /// # Arguments
    /// * `cards` Finished score cards, in the order their groups sit on the ladder (top first)
    /// * `attendance` Each team's play time this week. Teams missing from it count as not attending
    ///
    /// # Return
    /// * The new ordering and every group that had to be skipped. A bad group never stops the rest of the batch
    pub fn apply_results(&mut self, cards: &[ScoreCard], attendance: &HashMap<TeamId, PlayTime>) -> CycleReport
    {
        self.apply_batch(cards.iter().map(BatchEntry::Card), attendance)
    }

    /// Same as `apply_results` but with room for groups that were rejected before reaching the ladder.
    pub fn apply_batch<'a, I>(&mut self, batch: I, attendance: &HashMap<TeamId, PlayTime>) -> CycleReport
        where I: IntoIterator<Item = BatchEntry<'a>>
    {
        let mut failures = Vec::new();
        let mut used: HashSet<TeamId> = HashSet::new();
        let mut groups = 0;

        /* Bottom team of the group just above, if that group was applied */
        let mut previous_bottom: Option<TeamId> = None;

        for entry in batch
        {
            groups += 1;

            let card = match entry
            {
                BatchEntry::Card(card) => card,
                BatchEntry::Rejected(failure) =>
                {
                    warn!("Skipping match group: {} because {}", failure.match_group, failure.error);
                    failures.push(failure);
                    previous_bottom = None;
                    continue;
                },
            };

            match self.arrange_match_results(card, &mut used)
            {
                Ok((top, bottom)) =>
                {
                    if let Some(above) = previous_bottom.take()
                    {
                        self.splice_groups(&above, &top);
                    }
                    previous_bottom = Some(bottom);
                },
                Err(error) =>
                {
                    let group_id = card.match_group().id().clone();
                    warn!("Skipping match group: {} because {}", group_id, error);
                    failures.push(GroupFailure::new(group_id, error));
                    previous_bottom = None;
                },
            }
        }

        self.demote_absent_teams(attendance);

        info!("Reordered ladder of {} teams from {} match groups ({} skipped)", self.len(), groups, failures.len());

        CycleReport {
            ordering: self.teams().to_vec(),
            failures,
        }
    }

    /// Re-orders one group inside the places it already holds.
    ///
    /// The group's ascending ladder slots are refilled in the order of the card's ranked results,
    /// so the ladder always agrees with what the score card reports for the group.
    ///
    /// # Return
    /// * A tuple where `.0` is the group's top team and `.1` its bottom team after the reorder
    fn arrange_match_results(&mut self, card: &ScoreCard, used: &mut HashSet<TeamId>) -> Result<(TeamId, TeamId)>
    {
        let ranked = card.ranked_results()?;

        /* Resolve everything first so a missing team leaves the ladder untouched */
        let mut slots: Vec<usize> = Vec::with_capacity(ranked.len());
        for team in ranked.iter()
        {
            if used.contains(team)
            {
                bail!(ErrorKind::DuplicateTeam(team.clone()));
            }

            slots.push(self.find_position(team)?);
        }

        slots.sort();

        let top = ranked.first().cloned()
            .ok_or_else(|| format!("Match group: {} has no teams", card.match_group().id()))?;
        let bottom = ranked.last().cloned()
            .ok_or_else(|| format!("Match group: {} has no teams", card.match_group().id()))?;

        for (slot, team) in slots.into_iter().zip(ranked.into_iter())
        {
            if self.teams[slot] != team
            {
                trace!("Moving team: {} to {}", team, slot);
            }

            used.insert(team.clone());
            self.teams[slot] = team;
        }

        debug!("Match group: {} finished as {} (top) .. {} (bottom)", card.match_group().id(), top, bottom);

        Ok((top, bottom))
    }

    /// The bottom team of the group above trades places with the top team of the group below.
    fn splice_groups(&mut self, above: &TeamId, below: &TeamId)
    {
        match (self.find_position(above), self.find_position(below))
        {
            (Ok(above_position), Ok(below_position)) if above_position < below_position =>
            {
                debug!("Team: {} moves up to {}, team: {} moves down to {}", below, above_position, above, below_position);
                self.teams.swap(above_position, below_position);
            },
            (above_position, below_position) =>
            {
                warn!("Not swapping team: {} ({:?}) with team: {} ({:?}), groups are out of ladder order", above, above_position.ok(), below, below_position.ok());
            },
        }
    }

    /// Drops every non-attending team `absence_penalty` places, walking up from the bottom.
    ///
    /// Each absent team moves once. Near the bottom a team stops directly above the last absent
    /// team already moved, so absent teams never leapfrog each other or climb.
    fn demote_absent_teams(&mut self, attendance: &HashMap<TeamId, PlayTime>)
    {
        let penalty = self.config().absence_penalty;
        let size = self.teams.len();

        let absent: Vec<usize> = self.teams.iter()
            .enumerate()
            .filter(|&(_, team)| !attendance.get(team).cloned().unwrap_or_default().is_playable())
            .map(|(position, _)| position)
            .collect();

        let mut floor = size;
        for &position in absent.iter().rev()
        {
            let target = cmp::min(position + penalty, floor - 1);
            if target > position
            {
                let team = self.teams.remove(position);
                trace!("Demoting absent team: {} from {} to {}", team, position, target);
                self.teams.insert(target, team);
            }

            floor = target;
        }
    }
}
