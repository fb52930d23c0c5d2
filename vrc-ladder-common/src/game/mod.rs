pub mod match_group;

pub use self::match_group::MatchGroupId;
pub use self::match_group::MatchGroup;



pub mod score;

pub use self::score::ScoreCard;
pub use self::score::ScoreCardId;
pub use self::score::ScoreBoard;
pub use self::score::ScoringRule;
pub use self::score::RankingStrategy;
pub use self::score::Standing;
pub use self::score::{FOUR_TEAM_RULE, THREE_TEAM_RULE};



pub mod matchmaking;

pub use self::matchmaking::Matchmaking;
pub use self::matchmaking::form_match_groups;
