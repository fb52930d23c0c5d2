use game::MatchGroupId;
use game::score::ScoreCard;
use team::TeamId;

use ::errors::*;

use std::collections::HashMap;
use std::sync::Mutex;

/// Every score card for one night, kept in the order their groups sit on the ladder.
///
/// Each card has its own lock so different courts can report at the same time while any
/// single card only ever has one writer.
#[derive(Debug, Default)]
pub struct ScoreBoard
{
    cards: Vec<Mutex<ScoreCard>>,
    index: HashMap<MatchGroupId, usize>,
}

impl ScoreBoard
{
    pub fn new() -> ScoreBoard
    {
        ScoreBoard::default()
    }

    /// Cards must be added top of the ladder first.
    pub fn add(&mut self, card: ScoreCard) -> Result<()>
    {
        let group_id = card.match_group().id().clone();
        if self.index.contains_key(&group_id)
        {
            bail!("Match group: {} already has a score card", group_id);
        }

        self.index.insert(group_id, self.cards.len());
        self.cards.push(Mutex::new(card));

        Ok(())
    }

    pub fn len(&self) -> usize
    {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.cards.is_empty()
    }

    pub fn record_round_winner(&self, match_group: &MatchGroupId, team: &TeamId) -> Result<()>
    {
        self.with_card(match_group, |card| card.record_round_winner(team))
    }

    pub fn ranked_results(&self, match_group: &MatchGroupId) -> Result<Vec<TeamId>>
    {
        self.with_card(match_group, |card| card.ranked_results())
    }

    pub fn card(&self, match_group: &MatchGroupId) -> Result<ScoreCard>
    {
        self.with_card(match_group, |card| Ok(card.clone()))
    }

    /// Copies of every card in ladder order, ready for `Ladder::apply_results`.
    pub fn cards(&self) -> Result<Vec<ScoreCard>>
    {
        let mut cards = Vec::with_capacity(self.cards.len());

        for card in self.cards.iter()
        {
            match card.lock()
            {
                Ok(card) => cards.push(card.clone()),
                Err(error) => bail!(ErrorKind::LockPoisoned(format!("score card because {}", error))),
            }
        }

        Ok(cards)
    }

    fn with_card<F, T>(&self, match_group: &MatchGroupId, action: F) -> Result<T>
        where F: FnOnce(&mut ScoreCard) -> Result<T>
    {
        let position = *self.index.get(match_group)
            .ok_or_else(|| Error::from(ErrorKind::MatchGroupNotFound(match_group.clone())))?;
        let card = self.cards.get(position)
            .ok_or_else(|| Error::from(ErrorKind::MatchGroupNotFound(match_group.clone())))?;

        match card.lock()
        {
            Ok(mut card) => action(&mut *card),
            Err(error) => bail!(ErrorKind::LockPoisoned(format!("score card for {} because {}", match_group, error))),
        }
    }
}
