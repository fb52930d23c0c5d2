extern crate serde_json;
extern crate vrc_ladder_common;

use vrc_ladder_common::errors::ErrorKind;
use vrc_ladder_common::game::{MatchGroup, MatchGroupId, RankingStrategy, ScoreBoard, ScoreCard};
use vrc_ladder_common::game::{FOUR_TEAM_RULE, THREE_TEAM_RULE};
use vrc_ladder_common::team::TeamId;

use serde_json::Value;

use std::sync::Arc;
use std::thread;

fn ids(names: &[&str]) -> Vec<TeamId>
{
    names.iter().map(|name| TeamId::new(*name)).collect()
}

fn group(id: &str, names: &[&str]) -> MatchGroup
{
    MatchGroup::new(MatchGroupId::new(id), ids(names)).unwrap()
}

fn record(card: &mut ScoreCard, winners: &[&str])
{
    for winner in winners
    {
        card.record_round_winner(&TeamId::new(*winner)).unwrap();
    }
}

fn names(teams: &[TeamId]) -> Vec<&str>
{
    teams.iter().map(|team| team.as_str()).collect()
}

#[test]
fn test_rounds_advance()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    assert_eq!(card.current_round(), 1);
    assert_eq!(card.rounds_remaining(), 3);

    record(&mut card, &["T2"]);

    assert_eq!(card.current_round(), 2);
    assert_eq!(card.recorded_rounds(), 1);
    assert_eq!(card.round_winners().get(&1), Some(&TeamId::new("T2")));
    assert!(!card.is_complete());
}

#[test]
fn test_fourth_round_is_rejected()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    record(&mut card, &["T1", "T2", "T3"]);
    assert!(card.is_complete());

    match *card.record_round_winner(&TeamId::new("T4")).unwrap_err().kind()
    {
        ErrorKind::RoundsComplete(ref group, rounds) =>
        {
            assert_eq!(group.as_str(), "G1");
            assert_eq!(rounds, 3);
        },
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(card.round_winners().len(), 3);
}

#[test]
fn test_winner_must_be_in_group()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3"]), THREE_TEAM_RULE).unwrap();

    match *card.record_round_winner(&TeamId::new("T9")).unwrap_err().kind()
    {
        ErrorKind::TeamNotInGroup(ref team, ref group) =>
        {
            assert_eq!(team.as_str(), "T9");
            assert_eq!(group.as_str(), "G1");
        },
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(card.current_round(), 1);
}

#[test]
fn test_results_need_every_round()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    record(&mut card, &["T1", "T1"]);

    match *card.ranked_results().unwrap_err().kind()
    {
        ErrorKind::RoundsIncomplete(_, recorded, rounds) =>
        {
            assert_eq!(recorded, 2);
            assert_eq!(rounds, 3);
        },
        ref other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_ranked_results_most_wins_first()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    record(&mut card, &["T1", "T1", "T3"]);

    let ranked = card.ranked_results().unwrap();

    assert_eq!(names(&ranked), vec!["T1", "T3", "T2", "T4"]);
    assert_eq!(card.wins_for(&TeamId::new("T1")), 2);
    assert_eq!(card.wins_for(&TeamId::new("T4")), 0);
}

#[test]
fn test_ties_go_to_earliest_win()
{
    let mut card = ScoreCard::new(group("G1", &["A", "B", "C"]), THREE_TEAM_RULE).unwrap();
    record(&mut card, &["C", "B", "A"]);

    assert_eq!(names(&card.ranked_results().unwrap()), vec!["C", "B", "A"]);

    let standings = card.standings().unwrap();
    assert_eq!(standings[0].first_win, Some(1));
    assert_eq!(standings[2].first_win, Some(3));
}

#[test]
fn test_ties_keep_seed_order()
{
    let mut card = ScoreCard::new(group("G1", &["A", "B", "C"]), THREE_TEAM_RULE).unwrap()
        .with_strategy(RankingStrategy::MostWinsThenSeed);
    record(&mut card, &["C", "B", "A"]);

    assert_eq!(names(&card.ranked_results().unwrap()), vec!["A", "B", "C"]);
}

#[test]
fn test_winless_teams_keep_seed_order()
{
    let mut card = ScoreCard::new(group("G1", &["A", "B", "C", "D"]), FOUR_TEAM_RULE).unwrap();
    record(&mut card, &["D", "D", "D"]);

    assert_eq!(names(&card.ranked_results().unwrap()), vec!["D", "A", "B", "C"]);
}

#[test]
fn test_group_winner()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    assert_eq!(card.group_winner(), None);

    record(&mut card, &["T2", "T3"]);
    assert_eq!(card.group_winner(), None);

    record(&mut card, &["T3"]);
    assert_eq!(card.group_winner(), Some(&TeamId::new("T3")));
}

#[test]
fn test_group_winner_before_last_round()
{
    let mut card = ScoreCard::new(group("G1", &["T1", "T2", "T3", "T4"]), FOUR_TEAM_RULE).unwrap();
    record(&mut card, &["T2", "T2"]);

    assert!(!card.is_complete());
    assert_eq!(card.group_winner(), Some(&TeamId::new("T2")));
}

#[test]
fn test_group_size_must_match_rule()
{
    match *ScoreCard::new(group("G1", &["T1", "T2", "T3"]), FOUR_TEAM_RULE).unwrap_err().kind()
    {
        ErrorKind::InvalidGroupSize(_, size, expected) =>
        {
            assert_eq!(size, 3);
            assert_eq!(expected, 4);
        },
        ref other => panic!("unexpected error: {:?}", other),
    }

    assert!(ScoreCard::for_group(group("G2", &["T1", "T2", "T3", "T4", "T5"])).is_err());
    assert_eq!(ScoreCard::for_group(group("G3", &["T1", "T2", "T3"])).unwrap().rule(), THREE_TEAM_RULE);
}

#[test]
fn test_match_group_rejects_repeated_team()
{
    let result = MatchGroup::new(MatchGroupId::new("G1"), ids(&["T1", "T2", "T1"]));

    match *result.unwrap_err().kind()
    {
        ErrorKind::DuplicateTeam(ref team) => assert_eq!(team.as_str(), "T1"),
        ref other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_score_board()
{
    let mut board = ScoreBoard::new();
    board.add(ScoreCard::for_group(group("G1", &["T1", "T2", "T3", "T4"])).unwrap()).unwrap();
    board.add(ScoreCard::for_group(group("G2", &["T5", "T6", "T7"])).unwrap()).unwrap();
    assert_eq!(board.len(), 2);

    assert!(board.add(ScoreCard::for_group(group("G1", &["T8", "T9", "T10"])).unwrap()).is_err());

    let first = MatchGroupId::new("G1");
    for winner in ["T4", "T4", "T1"].iter()
    {
        board.record_round_winner(&first, &TeamId::new(*winner)).unwrap();
    }

    assert_eq!(names(&board.ranked_results(&first).unwrap()), vec!["T4", "T1", "T2", "T3"]);
    assert!(board.ranked_results(&MatchGroupId::new("G2")).is_err());

    let cards = board.cards().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].match_group().id(), &first);
}

#[test]
fn test_score_board_unknown_group()
{
    let board = ScoreBoard::new();

    match *board.record_round_winner(&MatchGroupId::new("G9"), &TeamId::new("T1")).unwrap_err().kind()
    {
        ErrorKind::MatchGroupNotFound(ref group) => assert_eq!(group.as_str(), "G9"),
        ref other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_score_board_reports_from_many_threads()
{
    let mut board = ScoreBoard::new();
    board.add(ScoreCard::for_group(group("G1", &["A1", "A2", "A3", "A4"])).unwrap()).unwrap();
    board.add(ScoreCard::for_group(group("G2", &["B1", "B2", "B3"])).unwrap()).unwrap();
    let board = Arc::new(board);

    let handles: Vec<_> = vec![("G1", "A3"), ("G2", "B2")]
        .into_iter()
        .map(|(group_id, winner)| {
            let board = board.clone();
            thread::spawn(move || {
                for _ in 0..3
                {
                    board.record_round_winner(&MatchGroupId::new(group_id), &TeamId::new(winner)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles
    {
        handle.join().unwrap();
    }

    assert!(board.card(&MatchGroupId::new("G1")).unwrap().is_complete());
    assert_eq!(board.ranked_results(&MatchGroupId::new("G2")).unwrap()[0].as_str(), "B2");
}

/// A three team card with round 1 won by `A`, as it would be stored.
fn stored_card() -> Value
{
    let mut card = ScoreCard::new(group("G1", &["A", "B", "C"]), THREE_TEAM_RULE).unwrap();
    record(&mut card, &["A"]);

    serde_json::to_value(&card).unwrap()
}

#[test]
fn test_stored_card_reads_back()
{
    let mut card = ScoreCard::new(group("G1", &["A", "B", "C"]), THREE_TEAM_RULE).unwrap()
        .with_strategy(RankingStrategy::MostWinsThenSeed);
    record(&mut card, &["B", "C"]);

    let loaded: ScoreCard = serde_json::from_value(serde_json::to_value(&card).unwrap()).unwrap();

    assert_eq!(loaded, card);

    /* The replayed card carries on where the stored one stopped */
    let mut loaded = loaded;
    record(&mut loaded, &["A"]);
    assert_eq!(names(&loaded.ranked_results().unwrap()), vec!["A", "B", "C"]);
}

#[test]
fn test_stored_card_with_bad_round_counter_is_rejected()
{
    for current_round in [0, 1, 3].iter()
    {
        let mut stored = stored_card();
        stored["current_round"] = Value::from(*current_round);

        let error = serde_json::from_value::<ScoreCard>(stored).unwrap_err();
        assert!(error.to_string().contains("after 1 recorded rounds"), "{}", error);
    }
}

#[test]
fn test_stored_card_with_stranger_as_winner_is_rejected()
{
    let mut stored = stored_card();
    stored["round_winners"]["1"] = Value::from("Z");

    let error = serde_json::from_value::<ScoreCard>(stored).unwrap_err();

    assert!(error.to_string().contains("Team: Z is not in match group: G1"), "{}", error);
}

#[test]
fn test_stored_card_with_skipped_round_is_rejected()
{
    let mut stored = stored_card();
    stored["round_winners"] = serde_json::from_str(r#"{ "2": "A" }"#).unwrap();

    let error = serde_json::from_value::<ScoreCard>(stored).unwrap_err();

    assert!(error.to_string().contains("round 2 but expected round 1"), "{}", error);
}

#[test]
fn test_stored_card_with_too_many_rounds_is_rejected()
{
    let mut stored = stored_card();
    stored["round_winners"] = serde_json::from_str(r#"{ "1": "A", "2": "A", "3": "B", "4": "C" }"#).unwrap();
    stored["current_round"] = Value::from(5);

    let error = serde_json::from_value::<ScoreCard>(stored).unwrap_err();

    assert!(error.to_string().contains("All 3 round winners have been recorded"), "{}", error);
}

#[test]
fn test_stored_card_with_wrong_group_size_is_rejected()
{
    let mut stored = stored_card();
    stored["rule"] = serde_json::to_value(&FOUR_TEAM_RULE).unwrap();

    let error = serde_json::from_value::<ScoreCard>(stored).unwrap_err();

    assert!(error.to_string().contains("has 3 teams but must have 4"), "{}", error);
}

#[test]
fn test_stored_match_group_with_repeated_team_is_rejected()
{
    let stored = r#"{ "id": "G1", "teams": ["A", "B", "A"] }"#;

    let error = serde_json::from_str::<MatchGroup>(stored).unwrap_err();

    assert!(error.to_string().contains("Team with id: A already occupies a position"), "{}", error);
}
