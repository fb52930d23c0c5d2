pub mod attendance;
pub mod registry;

pub use self::attendance::PlayTime;
pub use self::registry::TeamRegistry;

use regex::Regex;

use uuid::Uuid;

use ::errors::*;

use std::convert::TryFrom;
use std::fmt;

/// Identity of a team. Persisted teams keep the id they were stored with, new ones get a random one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(String);

impl TeamId
{
    pub fn new<S>(id: S) -> TeamId
        where S: Into<String>
    {
        TeamId(id.into())
    }

    pub fn generate() -> TeamId
    {
        TeamId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl fmt::Display for TeamId
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl<'a> From<&'a str> for TeamId
{
    fn from(id: &'a str) -> TeamId
    {
        TeamId::new(id)
    }
}

/// Student number style id, digits only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub struct UserId(String);

impl TryFrom<String> for UserId
{
    type Error = Error;

    fn try_from(raw: String) -> Result<UserId>
    {
        UserId::parse(raw)
    }
}

impl UserId
{
    pub fn parse<S>(raw: S) -> Result<UserId>
        where S: Into<String>
    {
        lazy_static! {
            static ref USER_ID_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
        }

        let raw = raw.into();
        if !USER_ID_REGEX.is_match(&raw)
        {
            bail!(ErrorKind::InvalidUserId(raw));
        }

        Ok(UserId(raw))
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl fmt::Display for UserId
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// Two players playing together. The pairing never changes after creation, only the attendance does.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "TeamRecord")]
pub struct Team
{
    id: TeamId,
    first_player: UserId,
    second_player: UserId,
    pub play_time: PlayTime,
}

#[derive(Deserialize)]
struct TeamRecord
{
    id: TeamId,
    first_player: UserId,
    second_player: UserId,
    #[serde(default)]
    play_time: PlayTime,
}

impl TryFrom<TeamRecord> for Team
{
    type Error = Error;

    fn try_from(record: TeamRecord) -> Result<Team>
    {
        let mut team = Team::new(record.id, record.first_player, record.second_player)?;
        team.play_time = record.play_time;

        Ok(team)
    }
}

impl Team
{
    pub fn new(id: TeamId, first_player: UserId, second_player: UserId) -> Result<Team>
    {
        if first_player == second_player
        {
            bail!(ErrorKind::DuplicateTeamMember(first_player));
        }

        Ok(
            Team {
                id,
                first_player,
                second_player,
                play_time: PlayTime::default(),
            }
        )
    }

    pub fn id(&self) -> &TeamId
    {
        &self.id
    }

    pub fn first_player(&self) -> &UserId
    {
        &self.first_player
    }

    pub fn second_player(&self) -> &UserId
    {
        &self.second_player
    }

    pub fn has_player(&self, user: &UserId) -> bool
    {
        self.first_player == *user || self.second_player == *user
    }

    pub fn is_attending(&self) -> bool
    {
        self.play_time.is_playable()
    }
}

impl fmt::Display for Team
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{} ({}, {}) @ {}", self.id, self.first_player, self.second_player, self.play_time)
    }
}
