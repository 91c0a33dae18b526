//! Event-router and extension-point integration tests.
//!
//! Permission answers, listener notification, eviction hooks, and
//! template reload behavior, driven end to end through `dispatch`.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::FakeHost;
use ctf_arbiter::{
    Arbiter, CaptureNotice, FlagId, GameEvent, MessageTemplates, PlayerId, Team,
};

const RED_FLAG: FlagId = FlagId::new(1);
const PLAYER: PlayerId = PlayerId::new(1);

fn attach_listener(arbiter: &mut Arbiter) -> Rc<RefCell<Vec<CaptureNotice>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    arbiter.register_listener(Box::new(move |notice: &CaptureNotice| {
        sink.borrow_mut().push(*notice);
    }));
    seen
}

#[test]
fn test_disallowed_self_capture_permission() {
    let mut host = FakeHost::new();
    host.join(PLAYER, Team::Red);

    let mut arbiter = Arbiter::new();
    let seen = attach_listener(&mut arbiter);

    let allowed = arbiter.dispatch(
        &mut host,
        &GameEvent::CapturePermission {
            player: PLAYER,
            capping: Team::Red,
            capped: Team::Red,
        },
    );

    assert!(!allowed);
    let notices = seen.borrow();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].was_disallowed);
    assert!(notices[0].was_self_cap);
    assert!(!notices[0].was_unfair);
}

#[test]
fn test_self_capture_permitted_when_option_off() {
    let mut host = FakeHost::new();
    host.disallow_self_cap = false;
    host.join(PLAYER, Team::Red);

    let mut arbiter = Arbiter::new();
    let seen = attach_listener(&mut arbiter);

    let allowed = arbiter.dispatch(
        &mut host,
        &GameEvent::CapturePermission {
            player: PLAYER,
            capping: Team::Red,
            capped: Team::Red,
        },
    );

    assert!(allowed);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_enemy_capture_permission_always_allowed() {
    let mut host = FakeHost::new();
    host.join(PLAYER, Team::Green);

    let mut arbiter = Arbiter::new();
    let allowed = arbiter.dispatch(
        &mut host,
        &GameEvent::CapturePermission {
            player: PLAYER,
            capping: Team::Green,
            capped: Team::Red,
        },
    );
    assert!(allowed);
}

#[test]
fn test_settled_capture_notifies_listeners() {
    let mut host = FakeHost::new();
    host.set_team_size(Team::Green, 2);
    host.set_team_size(Team::Red, 5);
    host.join(PLAYER, Team::Green);

    let mut arbiter = Arbiter::new();
    let seen = attach_listener(&mut arbiter);

    arbiter.dispatch(
        &mut host,
        &GameEvent::FlagGrabbed {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    arbiter.dispatch(
        &mut host,
        &GameEvent::CaptureCompleted {
            player: PLAYER,
            capping: Team::Green,
            capped: Team::Red,
        },
    );

    let notices = seen.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].player, PLAYER);
    assert!(!notices[0].was_unfair);
    assert!(!notices[0].was_disallowed);
    assert!(!notices[0].was_self_cap);
}

#[test]
fn test_unfair_capture_notice_flags_unfairness() {
    let mut host = FakeHost::new();
    host.warn_unfair = false;
    host.set_team_size(Team::Green, 5);
    host.set_team_size(Team::Red, 2);
    host.join(PLAYER, Team::Green);

    let mut arbiter = Arbiter::new();
    let seen = attach_listener(&mut arbiter);

    arbiter.dispatch(
        &mut host,
        &GameEvent::FlagGrabbed {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    arbiter.dispatch(
        &mut host,
        &GameEvent::CaptureCompleted {
            player: PLAYER,
            capping: Team::Green,
            capped: Team::Red,
        },
    );

    assert!(seen.borrow()[0].was_unfair);
}

#[test]
fn test_unregistered_listener_hears_nothing() {
    let mut host = FakeHost::new();
    host.join(PLAYER, Team::Red);

    let mut arbiter = Arbiter::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = arbiter.register_listener(Box::new(move |notice: &CaptureNotice| {
        sink.borrow_mut().push(*notice);
    }));

    assert!(arbiter.unregister_listener(id));
    assert!(!arbiter.unregister_listener(id));

    arbiter.dispatch(
        &mut host,
        &GameEvent::CapturePermission {
            player: PLAYER,
            capping: Team::Red,
            capped: Team::Red,
        },
    );
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_player_parted_evicts_warning_throttle() {
    let mut host = FakeHost::new();
    host.set_team_size(Team::Red, 3);
    host.set_team_size(Team::Green, 3);
    host.join(PLAYER, Team::Green);
    host.join(PlayerId::new(2), Team::Green);

    let mut arbiter = Arbiter::new();
    arbiter.dispatch(
        &mut host,
        &GameEvent::CaptureCompleted {
            player: PlayerId::new(2),
            capping: Team::Green,
            capped: Team::Red,
        },
    );

    let grab = GameEvent::GrabPermission {
        player: PLAYER,
        flag: RED_FLAG,
        flag_team: Team::Red,
    };

    host.advance(1.0);
    arbiter.dispatch(&mut host, &grab);
    assert_eq!(host.private_to(PLAYER).len(), 2);

    // Within the anti-spam interval: silent.
    host.advance(1.0);
    arbiter.dispatch(&mut host, &grab);
    assert_eq!(host.private_to(PLAYER).len(), 2);

    // Disconnecting evicts the throttle entry.
    arbiter.dispatch(&mut host, &GameEvent::PlayerParted { player: PLAYER });
    assert!(arbiter.warnings().is_empty());

    host.advance(1.0);
    arbiter.dispatch(&mut host, &grab);
    assert_eq!(host.private_to(PLAYER).len(), 4);
}

#[test]
fn test_flag_removed_evicts_drop_ledger() {
    let mut host = FakeHost::new();
    host.set_team_size(Team::Green, 2);
    host.set_team_size(Team::Red, 5);
    host.join(PLAYER, Team::Green);

    let mut arbiter = Arbiter::new();
    arbiter.dispatch(
        &mut host,
        &GameEvent::FlagDropped {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    assert_eq!(arbiter.drops().len(), 1);

    arbiter.dispatch(&mut host, &GameEvent::FlagRemoved { flag: RED_FLAG });
    assert!(arbiter.drops().is_empty());

    // With the drop record gone, a grab seconds later is eligible again.
    host.advance(2.0);
    arbiter.dispatch(
        &mut host,
        &GameEvent::FlagGrabbed {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    assert_eq!(arbiter.captures().bonus(Team::Red), 39);
}

#[test]
fn test_non_permission_events_return_true() {
    let mut host = FakeHost::new();
    host.join(PLAYER, Team::Green);
    let mut arbiter = Arbiter::new();

    assert!(arbiter.dispatch(
        &mut host,
        &GameEvent::FlagGrabbed {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        }
    ));
    assert!(arbiter.dispatch(&mut host, &GameEvent::PlayerParted { player: PLAYER }));
    assert!(arbiter.dispatch(&mut host, &GameEvent::FlagRemoved { flag: RED_FLAG }));
}

#[test]
fn test_reload_templates_swaps_set() {
    let mut arbiter = Arbiter::new();
    assert!(arbiter.templates().fair_capture_public.is_empty());

    arbiter
        .reload_templates(r#"fair_capture_public = "gg {capper}""#)
        .unwrap();
    assert_eq!(arbiter.templates().fair_capture_public, "gg {capper}");
}

#[test]
fn test_reload_failure_keeps_previous_templates() {
    let mut arbiter = Arbiter::with_templates(
        MessageTemplates::from_toml(r#"fair_capture_public = "original""#).unwrap(),
    );

    let result = arbiter.reload_templates("fair_capture_public = [broken");
    assert!(result.is_err());
    assert_eq!(arbiter.templates().fair_capture_public, "original");
}

#[test]
fn test_full_round_end_to_end() {
    let mut host = FakeHost::new();
    host.set_team_size(Team::Green, 2);
    host.set_team_size(Team::Red, 5);
    host.join(PLAYER, Team::Green);

    let mut arbiter = Arbiter::with_templates(
        MessageTemplates::from_toml(r#"fair_capture_public = "{capper}: {points}""#).unwrap(),
    );

    // Grab caches the bonus, capture settles it.
    arbiter.dispatch(
        &mut host,
        &GameEvent::FlagGrabbed {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    arbiter.dispatch(
        &mut host,
        &GameEvent::CaptureCompleted {
            player: PLAYER,
            capping: Team::Green,
            capped: Team::Red,
        },
    );

    assert_eq!(host.wins, vec![(PLAYER, 39)]);
    assert_eq!(host.broadcast_lines, vec!["player-1: 39"]);

    // The capped team's flag is now inside the re-grab window...
    host.advance(5.0);
    let allowed = arbiter.dispatch(
        &mut host,
        &GameEvent::GrabPermission {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    assert!(!allowed);

    // ...until the delay elapses.
    host.advance(15.0);
    let allowed = arbiter.dispatch(
        &mut host,
        &GameEvent::GrabPermission {
            player: PLAYER,
            flag: RED_FLAG,
            flag_team: Team::Red,
        },
    );
    assert!(allowed);
}
