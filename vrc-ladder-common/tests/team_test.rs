extern crate serde_json;
extern crate vrc_ladder_common;

use vrc_ladder_common::errors::ErrorKind;
use vrc_ladder_common::team::{PlayTime, Team, TeamId, TeamRegistry, UserId};

fn user(raw: &str) -> UserId
{
    UserId::parse(raw).unwrap()
}

#[test]
fn test_play_time()
{
    assert!(!PlayTime::None.is_playable());
    assert!(PlayTime::TimeSlotA.is_playable());
    assert!(PlayTime::TimeSlotB.is_playable());
    assert_eq!(PlayTime::default(), PlayTime::None);
    assert_eq!(PlayTime::all().iter().filter(|play_time| play_time.is_playable()).count(), 2);

    assert_eq!(serde_json::to_string(&PlayTime::TimeSlotA).unwrap(), "\"TIME_SLOT_A\"");
    assert_eq!(serde_json::from_str::<PlayTime>("\"NONE\"").unwrap(), PlayTime::None);
    assert_eq!(PlayTime::TimeSlotB.to_string(), "TIME_SLOT_B");
}

#[test]
fn test_user_id()
{
    assert_eq!(user("20512345").as_str(), "20512345");

    for raw in ["", "abc", "12a", " 12"].iter()
    {
        match *UserId::parse(*raw).unwrap_err().kind()
        {
            ErrorKind::InvalidUserId(ref value) => assert_eq!(value.as_str(), *raw),
            ref other => panic!("unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_team_needs_two_players()
{
    match *Team::new(TeamId::new("T1"), user("1"), user("1")).unwrap_err().kind()
    {
        ErrorKind::DuplicateTeamMember(ref player) => assert_eq!(player.as_str(), "1"),
        ref other => panic!("unexpected error: {:?}", other),
    }

    let team = Team::new(TeamId::new("T1"), user("1"), user("2")).unwrap();
    assert!(team.has_player(&user("2")));
    assert!(!team.has_player(&user("3")));
    assert!(!team.is_attending());
}

#[test]
fn test_registry_rejects_existing_pair()
{
    let mut registry = TeamRegistry::new();
    registry.create(user("1"), user("2")).unwrap();

    match *registry.create(user("2"), user("1")).unwrap_err().kind()
    {
        ErrorKind::ExistingTeam(_, _) => {},
        ref other => panic!("unexpected error: {:?}", other),
    }

    registry.create(user("1"), user("3")).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_registry_rejects_duplicate_id()
{
    let mut registry = TeamRegistry::new();
    registry.insert(Team::new(TeamId::new("T1"), user("1"), user("2")).unwrap()).unwrap();

    match *registry.insert(Team::new(TeamId::new("T1"), user("3"), user("4")).unwrap()).unwrap_err().kind()
    {
        ErrorKind::DuplicateTeam(ref team) => assert_eq!(team.as_str(), "T1"),
        ref other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_player_attends_with_one_team()
{
    let mut registry = TeamRegistry::new();
    let first = registry.create(user("1"), user("2")).unwrap();
    let second = registry.create(user("1"), user("3")).unwrap();

    registry.update_attendance(first.id(), PlayTime::TimeSlotA).unwrap();

    match *registry.update_attendance(second.id(), PlayTime::TimeSlotB).unwrap_err().kind()
    {
        ErrorKind::MultiplePlayTime(ref player, ref active) =>
        {
            assert_eq!(player.as_str(), "1");
            assert_eq!(active, first.id());
        },
        ref other => panic!("unexpected error: {:?}", other),
    }

    /* Staying home is always allowed, and frees the player up */
    registry.update_attendance(second.id(), PlayTime::None).unwrap();
    registry.update_attendance(first.id(), PlayTime::None).unwrap();
    let team = registry.update_attendance(second.id(), PlayTime::TimeSlotB).unwrap();
    assert_eq!(team.play_time, PlayTime::TimeSlotB);

    /* Changing slot for the same team isn't a conflict */
    registry.update_attendance(second.id(), PlayTime::TimeSlotA).unwrap();
}

#[test]
fn test_registry_attendance_snapshot()
{
    let mut registry = TeamRegistry::new();
    let first = registry.create(user("1"), user("2")).unwrap();
    let second = registry.create(user("3"), user("4")).unwrap();
    registry.update_attendance(first.id(), PlayTime::TimeSlotB).unwrap();

    let attendance = registry.attendance();

    assert_eq!(attendance.len(), 2);
    assert_eq!(attendance[first.id()], PlayTime::TimeSlotB);
    assert_eq!(attendance[second.id()], PlayTime::None);
}

#[test]
fn test_registry_unknown_team()
{
    let mut registry = TeamRegistry::new();
    let missing = TeamId::new("missing");

    assert!(registry.get(&missing).is_none());
    assert!(registry.update_attendance(&missing, PlayTime::TimeSlotA).is_err());

    match *registry.remove(&missing).unwrap_err().kind()
    {
        ErrorKind::TeamNotFound(ref team) => assert_eq!(team, &missing),
        ref other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_registry_insert_checks_attendance()
{
    let mut registry = TeamRegistry::new();
    let mut first = Team::new(TeamId::new("T1"), user("1"), user("2")).unwrap();
    first.play_time = PlayTime::TimeSlotA;
    registry.insert(first).unwrap();

    let mut second = Team::new(TeamId::new("T2"), user("1"), user("3")).unwrap();
    second.play_time = PlayTime::TimeSlotB;

    match *registry.insert(second.clone()).unwrap_err().kind()
    {
        ErrorKind::MultiplePlayTime(ref player, ref active) =>
        {
            assert_eq!(player.as_str(), "1");
            assert_eq!(active.as_str(), "T1");
        },
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert!(registry.get(&TeamId::new("T2")).is_none());

    second.play_time = PlayTime::None;
    registry.insert(second).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_stored_team_is_validated()
{
    let stored = r#"{ "id": "T1", "first_player": "1", "second_player": "2", "play_time": "TIME_SLOT_A" }"#;
    let team: Team = serde_json::from_str(stored).unwrap();
    assert_eq!(team.play_time, PlayTime::TimeSlotA);

    let without_play_time = r#"{ "id": "T1", "first_player": "1", "second_player": "2" }"#;
    assert_eq!(serde_json::from_str::<Team>(without_play_time).unwrap().play_time, PlayTime::None);

    let same_player = r#"{ "id": "T1", "first_player": "1", "second_player": "1" }"#;
    let error = serde_json::from_str::<Team>(same_player).unwrap_err();
    assert!(error.to_string().contains("User: 1 cannot be both members of a team"), "{}", error);

    let bad_user = r#"{ "id": "T1", "first_player": "abc", "second_player": "2" }"#;
    let error = serde_json::from_str::<Team>(bad_user).unwrap_err();
    assert!(error.to_string().contains("abc is not a valid user ID."), "{}", error);
}
