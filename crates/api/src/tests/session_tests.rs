// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Session;
use crate::tests::helpers::{december_draft, december_period};
use crate::{ApiError, IssuedCall};
use tarif::{Effect, Intent, Mode, Resolution, ServiceError};

#[test]
fn test_start_issues_the_initial_list_fetch() {
    let mut session: Session = Session::new();

    let call: IssuedCall = session.start();

    assert_eq!(call.effect, Effect::FetchList);
    assert_eq!(session.state().mode, Mode::Browsing);
}

#[test]
fn test_current_list_resolution_is_applied() {
    let mut session: Session = Session::new();
    let call: IssuedCall = session.start();

    let follow_up = session.resolve(
        call.token,
        Resolution::ListFetched {
            outcome: Ok(vec![december_period(1)]),
        },
    );

    assert!(follow_up.is_none());
    assert_eq!(session.state().periods, vec![december_period(1)]);
}

#[test]
fn test_out_of_order_list_resolutions_keep_the_later_fetch() {
    let mut session: Session = Session::new();
    let first: IssuedCall = session.start();
    let second: IssuedCall = session
        .handle(Intent::RequestRefresh)
        .unwrap()
        .expect("refresh must issue a fetch");

    // The later-issued fetch resolves first
    session.resolve(
        second.token,
        Resolution::ListFetched {
            outcome: Ok(vec![december_period(2)]),
        },
    );

    // The earlier fetch arrives afterwards and must be dropped
    let follow_up = session.resolve(
        first.token,
        Resolution::ListFetched {
            outcome: Ok(vec![december_period(1)]),
        },
    );

    assert!(follow_up.is_none());
    assert_eq!(session.state().periods, vec![december_period(2)]);
}

#[test]
fn test_create_resolution_after_cancel_is_dropped() {
    let mut session: Session = Session::new();
    let list: IssuedCall = session.start();
    session.resolve(
        list.token,
        Resolution::ListFetched {
            outcome: Ok(Vec::new()),
        },
    );

    session.handle(Intent::RequestCompose).unwrap();
    let create: IssuedCall = session
        .handle(Intent::SubmitCreate {
            draft: december_draft(),
        })
        .unwrap()
        .expect("submit must issue a create");

    // The user cancels before the create resolves
    session.handle(Intent::CancelCompose).unwrap();
    assert_eq!(session.state().mode, Mode::Browsing);

    // The late success must not be applied to the moved-on state
    let follow_up = session.resolve(
        create.token,
        Resolution::CreateFinished {
            outcome: Ok(december_period(1)),
        },
    );

    assert!(follow_up.is_none());
    assert!(session.state().periods.is_empty());
    assert_eq!(session.state().mode, Mode::Browsing);
    assert!(session.state().last_error.is_none());
}

#[test]
fn test_current_create_resolution_mints_a_follow_up_fetch() {
    let mut session: Session = Session::new();
    session.start();
    session.handle(Intent::RequestCompose).unwrap();
    let create: IssuedCall = session
        .handle(Intent::SubmitCreate {
            draft: december_draft(),
        })
        .unwrap()
        .expect("submit must issue a create");

    let follow_up = session
        .resolve(
            create.token,
            Resolution::CreateFinished {
                outcome: Ok(december_period(1)),
            },
        )
        .expect("create success must reload the list");

    assert_eq!(follow_up.effect, Effect::FetchList);
    assert_eq!(session.state().mode, Mode::Browsing);
    assert_eq!(session.state().periods, vec![december_period(1)]);
}

#[test]
fn test_create_failure_keeps_the_session_composing() {
    let mut session: Session = Session::new();
    session.start();
    session.handle(Intent::RequestCompose).unwrap();
    let create: IssuedCall = session
        .handle(Intent::SubmitCreate {
            draft: december_draft(),
        })
        .unwrap()
        .expect("submit must issue a create");

    let follow_up = session.resolve(
        create.token,
        Resolution::CreateFinished {
            outcome: Err(ServiceError::new(String::from("network timeout"))),
        },
    );

    assert!(follow_up.is_none());
    assert_eq!(session.state().mode, Mode::Composing);
    let notice = session.state().last_error.clone().unwrap();
    assert_eq!(notice.summary, "create failed");
    assert_eq!(notice.detail.as_deref(), Some("network timeout"));
}

#[test]
fn test_delete_resolution_after_decline_is_dropped() {
    let mut session: Session = Session::new();
    let list: IssuedCall = session.start();
    session.resolve(
        list.token,
        Resolution::ListFetched {
            outcome: Ok(vec![december_period(1)]),
        },
    );

    session
        .handle(Intent::RequestDelete { period_id: 1 })
        .unwrap();
    let delete: IssuedCall = session
        .handle(Intent::ConfirmDelete)
        .unwrap()
        .expect("confirm must issue a delete");

    // Declining after confirmation abandons the pending delete entirely
    session.handle(Intent::DeclineDelete).unwrap();

    let follow_up = session.resolve(
        delete.token,
        Resolution::DeleteFinished {
            period_id: 1,
            outcome: Ok(()),
        },
    );

    assert!(follow_up.is_none());
    assert_eq!(session.state().periods, vec![december_period(1)]);
}

#[test]
fn test_illegal_intent_is_rejected_at_the_boundary() {
    let mut session: Session = Session::new();
    session.start();

    let err = session.handle(Intent::ConfirmDelete).unwrap_err();

    assert_eq!(
        err,
        ApiError::IntentNotPermitted {
            intent: "ConfirmDelete",
            mode: Mode::Browsing,
        }
    );
}
