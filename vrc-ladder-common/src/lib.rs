// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

extern crate regex;
extern crate serde;
extern crate serde_json;
extern crate uuid;

pub mod team;
pub mod game;
pub mod ladder;

/*
    Common error_chain for the whole engine so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.
*/
pub mod errors {
    use ::team::{TeamId, UserId};
    use ::game::MatchGroupId;

    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }

        errors {
            TeamNotInGroup(team: TeamId, group: MatchGroupId) {
                description("team is not in match group")
                display("Team: {} is not in match group: {}", team, group)
            }
            RoundsComplete(group: MatchGroupId, rounds: u32) {
                description("all round winners have been recorded")
                display("All {} round winners have been recorded for match group: {}", rounds, group)
            }
            RoundsIncomplete(group: MatchGroupId, recorded: u32, rounds: u32) {
                description("not every round winner has been recorded")
                display("Only {} of {} rounds recorded for match group: {}", recorded, rounds, group)
            }
            TeamNotFound(team: TeamId) {
                description("team does not exist in the ladder")
                display("Team with id: {} does not exist in the ladder", team)
            }
            IndexOutOfRange(index: usize, size: usize) {
                description("ladder index out of range")
                display("Index: {} is out of range for ladder of size: {}", index, size)
            }
            DuplicateTeam(team: TeamId) {
                description("team already occupies a position")
                display("Team with id: {} already occupies a position", team)
            }
            LadderFull(capacity: usize) {
                description("ladder is at capacity")
                display("Ladder is at its capacity of {} teams", capacity)
            }
            MatchGroupNotFound(group: MatchGroupId) {
                description("match group not found")
                display("Match group: {} was not found", group)
            }
            InvalidGroupSize(group: MatchGroupId, size: usize, expected: usize) {
                description("match group has the wrong number of teams")
                display("Match group: {} has {} teams but must have {}", group, size, expected)
            }
            DuplicateTeamMember(user: UserId) {
                description("a team needs two different members")
                display("User: {} cannot be both members of a team", user)
            }
            ExistingTeam(first: UserId, second: UserId) {
                description("team already exists")
                display("A team of users: {} and {} already exists", first, second)
            }
            MultiplePlayTime(user: UserId, team: TeamId) {
                description("player is already attending with another team")
                display("User: {} is already attending with team: {}", user, team)
            }
            InvalidUserId(raw: String) {
                description("invalid user id")
                display("{} is not a valid user ID.", raw)
            }
            LockPoisoned(what: String) {
                description("lock was poisoned")
                display("Failed to acquire lock on {}", what)
            }
        }
    }
}
