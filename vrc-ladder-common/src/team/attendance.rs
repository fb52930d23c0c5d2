use std::fmt;

/// When a team wants to play this week. Names match what the database stores.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayTime
{
    /* Not attending */
    #[serde(rename = "NONE")]
    None,
    /* 8:00 PM */
    #[serde(rename = "TIME_SLOT_A")]
    TimeSlotA,
    /* 9:30 PM */
    #[serde(rename = "TIME_SLOT_B")]
    TimeSlotB,
}

impl PlayTime
{
    pub fn is_playable(self) -> bool
    {
        match self
        {
            PlayTime::None => false,
            PlayTime::TimeSlotA | PlayTime::TimeSlotB => true,
        }
    }

    pub fn all() -> [PlayTime; 3]
    {
        [PlayTime::None, PlayTime::TimeSlotA, PlayTime::TimeSlotB]
    }
}

impl Default for PlayTime
{
    fn default() -> PlayTime
    {
        PlayTime::None
    }
}

impl fmt::Display for PlayTime
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        let name = match *self
        {
            PlayTime::None => "NONE",
            PlayTime::TimeSlotA => "TIME_SLOT_A",
            PlayTime::TimeSlotB => "TIME_SLOT_B",
        };

        write!(f, "{}", name)
    }
}
