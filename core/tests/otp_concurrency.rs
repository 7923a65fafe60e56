//! Concurrency tests: store operations from many tasks at once

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};

use otp_core::services::otp::{OtpStore, Verifier};
use otp_core::VerificationOutcome;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_distinct_identifiers_do_not_interfere() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let verifier = Verifier::new(store.clone(), 3);

    let mut handles = Vec::new();
    for i in 0..64u32 {
        let store = store.clone();
        let verifier = verifier.clone();
        handles.push(tokio::spawn(async move {
            let identifier = format!("user{}@x.com", i);
            let code = format!("{}", 100_000 + i);
            let neighbour_code = format!("{}", 100_000 + (i + 1) % 64);
            store.issue(&identifier, &code);

            // Another user's code never unlocks this record
            let foreign = verifier.verify(&identifier, &neighbour_code);
            let own = verifier.verify(&identifier, &code);
            (foreign, own)
        }));
    }

    for handle in handles {
        let (foreign, own) = handle.await.unwrap();
        assert_eq!(foreign, VerificationOutcome::Mismatch { remaining_attempts: 2 });
        assert_eq!(own, VerificationOutcome::Success);
    }
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_correct_code_succeeds_exactly_once() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let verifier = Verifier::new(store.clone(), 3);
    store.issue("a@x.com", "123456");

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let verifier = verifier.clone();
            tokio::spawn(async move { verifier.verify("a@x.com", "123456") })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            VerificationOutcome::Success => successes += 1,
            VerificationOutcome::NotFound => {}
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mismatches_never_exceed_cap() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let verifier = Verifier::new(store.clone(), 3);
    store.issue("a@x.com", "123456");

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let verifier = verifier.clone();
            tokio::spawn(async move { verifier.verify("a@x.com", "000000") })
        })
        .collect();

    let mut mismatches = 0;
    let mut lockouts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            VerificationOutcome::Mismatch { .. } => mismatches += 1,
            VerificationOutcome::LockedOut => lockouts += 1,
            VerificationOutcome::NotFound => {}
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    assert_eq!(mismatches, 3);
    assert_eq!(lockouts, 1);
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sweep_races_with_issue() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let past = Utc::now() - ChronoDuration::minutes(30);

    for i in 0..50 {
        store.issue_at(&format!("stale{}@x.com", i), "111111", past);
    }

    let sweeper_store = store.clone();
    let sweep = tokio::spawn(async move { sweeper_store.sweep_expired(Utc::now()) });

    let issuers: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store.issue(&format!("fresh{}@x.com", i), "222222");
            })
        })
        .collect();

    for issuer in issuers {
        issuer.await.unwrap();
    }
    assert_eq!(sweep.await.unwrap(), 50);

    assert_eq!(store.len(), 50);
    assert!((0..50).all(|i| store.lookup(&format!("fresh{}@x.com", i)).is_some()));
}
