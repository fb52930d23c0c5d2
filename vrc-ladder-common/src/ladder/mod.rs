pub mod cycle;

pub use self::cycle::CycleReport;
pub use self::cycle::GroupFailure;
pub use self::cycle::BatchEntry;



pub mod shared;

pub use self::shared::SharedLadder;

use team::TeamId;

use ::errors::*;

use std::cmp;
use std::convert::TryFrom;
use std::collections::HashSet;
use std::fmt;

pub const LADDER_VOLUME: usize = 200;
pub const ABSENCE_PENALTY: usize = 2;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, new)]
pub struct LadderConfig
{
    /// Most teams the ladder will hold.
    pub capacity: usize,
    /// How many places a team drops for a week it doesn't attend.
    pub absence_penalty: usize,
}

impl Default for LadderConfig
{
    fn default() -> LadderConfig
    {
        LadderConfig {
            capacity: LADDER_VOLUME,
            absence_penalty: ABSENCE_PENALTY,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection
{
    Up,
    Down,
}

/// Every team in rank order, index 0 being the top of the ladder.
///
/// A team appears at most once and the ladder never grows past its configured capacity.
/// A stored ladder goes through `from_teams` when it is read back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "LadderRecord")]
pub struct Ladder
{
    teams: Vec<TeamId>,
    config: LadderConfig,
}

/* Stored shape of a ladder, before it is checked */
#[derive(Deserialize)]
struct LadderRecord
{
    teams: Vec<TeamId>,
    config: LadderConfig,
}

impl TryFrom<LadderRecord> for Ladder
{
    type Error = Error;

    fn try_from(record: LadderRecord) -> Result<Ladder>
    {
        Ladder::from_teams(record.config, record.teams)
    }
}

impl Default for Ladder
{
    fn default() -> Ladder
    {
        Ladder::new(LadderConfig::default())
    }
}

impl Ladder
{
    pub fn new(config: LadderConfig) -> Ladder
    {
        Ladder {
            teams: Vec::with_capacity(config.capacity),
            config,
        }
    }

    /// Rebuilds a ladder from a stored ordering.
    pub fn from_teams(config: LadderConfig, teams: Vec<TeamId>) -> Result<Ladder>
    {
        if teams.len() > config.capacity
        {
            bail!(ErrorKind::LadderFull(config.capacity));
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for team in teams.iter()
        {
            if !seen.insert(team)
            {
                bail!(ErrorKind::DuplicateTeam(team.clone()));
            }
        }

        Ok(
            Ladder {
                teams,
                config,
            }
        )
    }

    pub fn config(&self) -> &LadderConfig
    {
        &self.config
    }

    pub fn capacity(&self) -> usize
    {
        self.config.capacity
    }

    pub fn len(&self) -> usize
    {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.teams.is_empty()
    }

    pub fn teams(&self) -> &[TeamId]
    {
        &self.teams
    }

    pub fn contains(&self, team: &TeamId) -> bool
    {
        self.teams.contains(team)
    }

    pub fn find_position(&self, team: &TeamId) -> Result<usize>
    {
        self.teams.iter()
            .position(|other| other == team)
            .ok_or_else(|| ErrorKind::TeamNotFound(team.clone()).into())
    }

    pub fn position_of(&self, team: &TeamId) -> Result<usize>
    {
        self.find_position(team)
    }

    pub fn team_at(&self, index: usize) -> Result<&TeamId>
    {
        self.teams.get(index)
            .ok_or_else(|| ErrorKind::IndexOutOfRange(index, self.teams.len()).into())
    }

    /// Inserts `team` at `index`, pushing everyone from `index` down one place.
    pub fn insert_at(&mut self, index: usize, team: TeamId) -> Result<()>
    {
        if index > self.teams.len()
        {
            bail!(ErrorKind::IndexOutOfRange(index, self.teams.len()));
        }
        self.check_room_for(&team)?;

        trace!("Inserting team: {} at {}", team, index);
        self.teams.insert(index, team);

        Ok(())
    }

    /// Inserts team at the bottom of the ladder
    pub fn push(&mut self, team: TeamId) -> Result<()>
    {
        let bottom = self.teams.len();
        self.insert_at(bottom, team)
    }

    /// Takes `team` off the ladder, returning the position it held.
    pub fn remove(&mut self, team: &TeamId) -> Result<usize>
    {
        let position = self.find_position(team)?;
        self.teams.remove(position);

        debug!("Removed team: {} from position {}", team, position);
        Ok(position)
    }

    pub fn swap(&mut self, first: usize, second: usize) -> Result<()>
    {
        let size = self.teams.len();
        for &index in [first, second].iter()
        {
            if index >= size
            {
                bail!(ErrorKind::IndexOutOfRange(index, size));
            }
        }

        if first != second
        {
            trace!("Swapping {} ({}) with {} ({})", first, self.teams[first], second, self.teams[second]);
            self.teams.swap(first, second);
        }

        Ok(())
    }

    /// Both teams are looked up before anything moves, so a missing team leaves the ladder as it was.
    pub fn swap_teams(&mut self, first: &TeamId, second: &TeamId) -> Result<()>
    {
        let first_position = self.find_position(first)?;
        let second_position = self.find_position(second)?;

        self.swap(first_position, second_position)
    }

    /// Moves every team below `cutoff` (exclusive) `slots` places up or down.
    ///
    /// The moved band keeps its order and the teams it passes over fill the places it left, in
    /// their own order: going up, the teams directly above the band drop to the bottom; going
    /// down, the last teams of the band come up to sit directly under `cutoff`. `slots` is
    /// clamped so nothing leaves the ladder.
    pub fn shift(&mut self, direction: ShiftDirection, cutoff: usize, slots: usize) -> Result<()>
    {
        let size = self.teams.len();
        if cutoff >= size
        {
            bail!(ErrorKind::IndexOutOfRange(cutoff, size));
        }

        let band_start = cutoff + 1;
        match direction
        {
            ShiftDirection::Up =>
            {
                let slots = cmp::min(slots, band_start);
                self.teams[band_start - slots..].rotate_left(slots);
            },
            ShiftDirection::Down =>
            {
                let slots = cmp::min(slots, size - band_start);
                self.teams[band_start..].rotate_right(slots);
            },
        }

        trace!("Shifted teams below {} {:?} by {}", cutoff, direction, slots);
        Ok(())
    }

    /// Puts a block of new teams directly below `cutoff`, everyone under it moving down to make room.
    pub fn insert_band(&mut self, cutoff: usize, band: Vec<TeamId>) -> Result<()>
    {
        let size = self.teams.len();
        if cutoff >= size
        {
            bail!(ErrorKind::IndexOutOfRange(cutoff, size));
        }
        if size + band.len() > self.config.capacity
        {
            bail!(ErrorKind::LadderFull(self.config.capacity));
        }
        for (index, team) in band.iter().enumerate()
        {
            if self.contains(team) || band[..index].contains(team)
            {
                bail!(ErrorKind::DuplicateTeam(team.clone()));
            }
        }

        let slots = band.len();
        self.teams.extend(band);
        self.shift(ShiftDirection::Down, cutoff, slots)
    }

    fn check_room_for(&self, team: &TeamId) -> Result<()>
    {
        if self.contains(team)
        {
            bail!(ErrorKind::DuplicateTeam(team.clone()));
        }
        if self.teams.len() >= self.config.capacity
        {
            bail!(ErrorKind::LadderFull(self.config.capacity));
        }

        Ok(())
    }
}

impl fmt::Display for Ladder
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        for (index, team) in self.teams.iter().enumerate()
        {
            writeln!(f, "{} : {}", index, team)?;
        }

        Ok(())
    }
}
