//! Concurrency tests for check-in admission.
//!
//! The store must serialize the duplicate check and the append per
//! session: simultaneous check-ins with the same roll number admit
//! exactly one, and traffic on one session never corrupts another.

use std::sync::Arc;

use rollcall::adapters::storage::InMemorySessionStore;
use rollcall::application::handlers::attendance::{CheckInCommand, CheckInHandler};
use rollcall::application::handlers::session::{StartSessionCommand, StartSessionHandler};
use rollcall::domain::attendance::AttendanceError;
use rollcall::domain::foundation::SessionId;
use rollcall::ports::SessionStore;

fn handlers() -> (Arc<dyn SessionStore>, StartSessionHandler, Arc<CheckInHandler>) {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let start = StartSessionHandler::new(store.clone());
    let check_in = Arc::new(CheckInHandler::new(store.clone()));
    (store, start, check_in)
}

async fn start_session(start: &StartSessionHandler, subject: &str) -> SessionId {
    let result = start
        .handle(StartSessionCommand {
            subject: subject.to_string(),
        })
        .await
        .unwrap();
    *result.session.id()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn same_roll_no_admits_exactly_once_under_contention() {
    let (store, start, check_in) = handlers();
    let session_id = start_session(&start, "Physics").await;

    const N: usize = 64;
    let mut handles = Vec::with_capacity(N);
    for _ in 0..N {
        let check_in = check_in.clone();
        handles.push(tokio::spawn(async move {
            check_in
                .handle(CheckInCommand {
                    session_id,
                    roll_no: "A-101".to_string(),
                })
                .await
        }));
    }

    let mut admitted = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(result) => {
                admitted += 1;
                assert_eq!(result.count, 1);
            }
            Err(AttendanceError::DuplicateCheckIn { roll_no }) => {
                duplicates += 1;
                assert_eq!(roll_no, "A-101");
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(duplicates, N - 1);

    let attendees = store.attendees(&session_id).await.unwrap().unwrap();
    assert_eq!(attendees.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn distinct_roll_nos_all_admit_under_contention() {
    let (store, start, check_in) = handlers();
    let session_id = start_session(&start, "Physics").await;

    const N: usize = 64;
    let mut handles = Vec::with_capacity(N);
    for i in 0..N {
        let check_in = check_in.clone();
        handles.push(tokio::spawn(async move {
            check_in
                .handle(CheckInCommand {
                    session_id,
                    roll_no: format!("R-{}", i),
                })
                .await
        }));
    }

    let mut counts = Vec::with_capacity(N);
    for handle in handles {
        counts.push(handle.await.unwrap().unwrap().count);
    }

    // Counts are a permutation of 1..=N: every admission saw a distinct total.
    counts.sort_unstable();
    assert_eq!(counts, (1..=N as u32).collect::<Vec<_>>());

    let attendees = store.attendees(&session_id).await.unwrap().unwrap();
    assert_eq!(attendees.len(), N);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_sessions_do_not_interfere() {
    let (store, start, check_in) = handlers();

    let mut session_ids = Vec::new();
    for i in 0..8 {
        session_ids.push(start_session(&start, &format!("Subject-{}", i)).await);
    }

    let mut handles = Vec::new();
    for &session_id in &session_ids {
        for i in 0..8 {
            let check_in = check_in.clone();
            handles.push(tokio::spawn(async move {
                check_in
                    .handle(CheckInCommand {
                        session_id,
                        roll_no: format!("R-{}", i),
                    })
                    .await
            }));
        }
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for session_id in session_ids {
        let attendees = store.attendees(&session_id).await.unwrap().unwrap();
        assert_eq!(attendees.len(), 8);
    }
}
