use game::ScoreCard;
use ladder::{BatchEntry, CycleReport, Ladder, ShiftDirection};
use team::{TeamId, PlayTime};

use ::errors::*;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The process-wide ladder.
///
/// Every call takes the one lock for its whole duration, so a reordering cycle always runs
/// against a single consistent ordering and nobody observes it half way through.
#[derive(Debug, Clone)]
pub struct SharedLadder
{
    ladder: Arc<Mutex<Ladder>>,
}

impl SharedLadder
{
    pub fn new(ladder: Ladder) -> SharedLadder
    {
        SharedLadder {
            ladder: Arc::new(Mutex::new(ladder)),
        }
    }

    pub fn apply_results(&self, cards: &[ScoreCard], attendance: &HashMap<TeamId, PlayTime>) -> Result<CycleReport>
    {
        self.with_ladder(|ladder| Ok(ladder.apply_results(cards, attendance)))
    }

    pub fn apply_batch<'a, I>(&self, batch: I, attendance: &HashMap<TeamId, PlayTime>) -> Result<CycleReport>
        where I: IntoIterator<Item = BatchEntry<'a>>
    {
        self.with_ladder(|ladder| Ok(ladder.apply_batch(batch, attendance)))
    }

    pub fn position_of(&self, team: &TeamId) -> Result<usize>
    {
        self.with_ladder(|ladder| ladder.position_of(team))
    }

    pub fn team_at(&self, index: usize) -> Result<TeamId>
    {
        self.with_ladder(|ladder| ladder.team_at(index).map(|team| team.clone()))
    }

    pub fn insert_at(&self, index: usize, team: TeamId) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.insert_at(index, team))
    }

    pub fn push(&self, team: TeamId) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.push(team))
    }

    pub fn remove(&self, team: &TeamId) -> Result<usize>
    {
        self.with_ladder(|ladder| ladder.remove(team))
    }

    pub fn swap(&self, first: usize, second: usize) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.swap(first, second))
    }

    pub fn swap_teams(&self, first: &TeamId, second: &TeamId) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.swap_teams(first, second))
    }

    pub fn shift(&self, direction: ShiftDirection, cutoff: usize, slots: usize) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.shift(direction, cutoff, slots))
    }

    pub fn insert_band(&self, cutoff: usize, band: Vec<TeamId>) -> Result<()>
    {
        self.with_ladder(|ladder| ladder.insert_band(cutoff, band))
    }

    /// Copy of the ladder as it is right now, for persisting or display.
    pub fn snapshot(&self) -> Result<Ladder>
    {
        self.with_ladder(|ladder| Ok(ladder.clone()))
    }

    fn with_ladder<F, T>(&self, action: F) -> Result<T>
        where F: FnOnce(&mut Ladder) -> Result<T>
    {
        match self.ladder.lock()
        {
            Ok(mut ladder) => action(&mut *ladder),
            Err(error) => bail!(ErrorKind::LockPoisoned(format!("ladder because {}", error))),
        }
    }
}
