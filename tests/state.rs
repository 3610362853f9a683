// ABOUTME: Tests for the lifecycle transition table and checked transitions.
// ABOUTME: Covers legal predecessors and strict versus lenient policies.

mod support;

use ros2_fdu::fdu::{FduError, State, Transition, TransitionPolicy};
use ros2_fdu::types::Pid;
use support::talker;

const START: Transition = Transition::Start(Pid::new(4242));

#[test]
fn targets_match_hooks() {
    assert_eq!(Transition::Define.target(), State::Defined);
    assert_eq!(Transition::Configure.target(), State::Configured);
    assert_eq!(Transition::Clean.target(), State::Defined);
    assert_eq!(START.target(), State::Running);
    assert_eq!(Transition::Stop.target(), State::Configured);
    assert_eq!(Transition::Pause.target(), State::Paused);
    assert_eq!(Transition::Resume.target(), State::Running);
}

#[test]
fn happy_path_is_legal() {
    let path = [
        (State::Defined, Transition::Configure),
        (State::Configured, START),
        (State::Running, Transition::Pause),
        (State::Paused, Transition::Resume),
        (State::Running, Transition::Stop),
        (State::Configured, Transition::Clean),
    ];
    for (from, transition) in path {
        assert!(
            transition.is_legal_from(from),
            "{transition} should be legal from {from}"
        );
    }
}

#[test]
fn stop_is_legal_from_paused_and_configured() {
    assert!(Transition::Stop.is_legal_from(State::Paused));
    assert!(Transition::Stop.is_legal_from(State::Configured));
    assert!(!Transition::Stop.is_legal_from(State::Defined));
}

#[test]
fn nothing_leaves_migrating_or_error() {
    let all = [
        Transition::Define,
        Transition::Configure,
        Transition::Clean,
        START,
        Transition::Stop,
        Transition::Pause,
        Transition::Resume,
    ];
    for transition in all {
        assert!(!transition.is_legal_from(State::Migrating));
        assert!(!transition.is_legal_from(State::Error));
    }
}

#[test]
fn strict_apply_follows_table() {
    let mut fdu = talker();
    let policy = TransitionPolicy::Strict;

    assert_eq!(fdu.apply(Transition::Configure, policy), Ok(State::Configured));
    assert_eq!(fdu.apply(START, policy), Ok(State::Running));
    assert_eq!(fdu.pid(), Some(Pid::new(4242)));
    assert_eq!(fdu.apply(Transition::Pause, policy), Ok(State::Paused));

    let err = fdu.apply(Transition::Pause, policy).unwrap_err();
    assert!(matches!(
        err,
        FduError::InvalidTransition {
            from: State::Paused,
            to: State::Paused,
            ..
        }
    ));

    assert_eq!(fdu.apply(Transition::Stop, policy), Ok(State::Configured));
    assert_eq!(fdu.pid(), None);
}

#[test]
fn lenient_apply_accepts_anything() {
    let mut fdu = talker();
    assert_eq!(
        fdu.apply(Transition::Resume, TransitionPolicy::Lenient),
        Ok(State::Running)
    );
    assert_eq!(fdu.pid(), None);
}

#[test]
fn strict_rejection_message_names_states() {
    let mut fdu = talker();
    let err = fdu.apply(Transition::Clean, TransitionPolicy::Strict).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot clean an FDU in state DEFINED (would move to DEFINED)"
    );
}
