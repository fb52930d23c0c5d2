use team::TeamId;

use uuid::Uuid;

use ::errors::*;

use std::convert::TryFrom;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchGroupId(String);

impl MatchGroupId
{
    pub fn new<S>(id: S) -> MatchGroupId
        where S: Into<String>
    {
        MatchGroupId(id.into())
    }

    pub fn generate() -> MatchGroupId
    {
        MatchGroupId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl fmt::Display for MatchGroupId
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl<'a> From<&'a str> for MatchGroupId
{
    fn from(id: &'a str) -> MatchGroupId
    {
        MatchGroupId::new(id)
    }
}

/// Teams sharing a court for the night, listed in the order they held on the ladder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "MatchGroupRecord")]
pub struct MatchGroup
{
    id: MatchGroupId,
    teams: Vec<TeamId>,
}

#[derive(Deserialize)]
struct MatchGroupRecord
{
    id: MatchGroupId,
    teams: Vec<TeamId>,
}

impl TryFrom<MatchGroupRecord> for MatchGroup
{
    type Error = Error;

    fn try_from(record: MatchGroupRecord) -> Result<MatchGroup>
    {
        MatchGroup::new(record.id, record.teams)
    }
}

impl MatchGroup
{
    pub fn new(id: MatchGroupId, teams: Vec<TeamId>) -> Result<MatchGroup>
    {
        for (index, team) in teams.iter().enumerate()
        {
            if teams[..index].contains(team)
            {
                bail!(ErrorKind::DuplicateTeam(team.clone()));
            }
        }

        Ok(
            MatchGroup {
                id,
                teams,
            }
        )
    }

    pub fn id(&self) -> &MatchGroupId
    {
        &self.id
    }

    pub fn teams(&self) -> &[TeamId]
    {
        &self.teams
    }

    pub fn len(&self) -> usize
    {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.teams.is_empty()
    }

    pub fn contains(&self, team: &TeamId) -> bool
    {
        self.teams.contains(team)
    }
}
