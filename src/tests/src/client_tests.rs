//! Tests for the HTTP ledger client against stub backends.

use crate::stub::{spawn_fixed, spawn_ledger, unreachable_base_url};
use serde_json::json;
use tinytoken_client::{
    ClientError, HttpLedgerClient, LedgerApi, TransferOutcome, UserDetailsOutcome,
};
use tinytoken_core::types::{Scalar, TransferRequest, TransferResult, User};

/// Tests that user creation returns the id the backend issued.
#[tokio::test]
async fn test_create_user_returns_new_id() {
    let ledger = spawn_ledger(100).await;
    let client = HttpLedgerClient::new(ledger.base_url());

    assert_eq!(client.create_user().await.unwrap(), Scalar::from(1u64));
    assert_eq!(client.create_user().await.unwrap(), Scalar::from(2u64));
    assert_eq!(ledger.balance(2), Some(100));
}

/// Tests that only 201 counts as a created user.
#[tokio::test]
async fn test_create_user_requires_created_status() {
    let addr = spawn_fixed(200, "5").await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));

    assert!(matches!(
        client.create_user().await,
        Err(ClientError::UnexpectedStatus(200))
    ));
}

/// Tests that a created response without a JSON id is a decode failure.
#[tokio::test]
async fn test_create_user_with_malformed_body() {
    let addr = spawn_fixed(201, "user five").await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));

    assert!(matches!(client.create_user().await, Err(ClientError::Decode(_))));
}

/// Tests the lookup of an existing user.
#[tokio::test]
async fn test_user_details_found() {
    let ledger = spawn_ledger(100).await;
    ledger.insert_user(1, 100);
    let client = HttpLedgerClient::new(ledger.base_url());

    assert_eq!(
        client.user_details("1").await.unwrap(),
        UserDetailsOutcome::Found(User::new(1u64, 100u64))
    );
}

/// Tests that ids the backend refuses come back as invalid, not as errors.
#[tokio::test]
async fn test_user_details_invalid_ids() {
    let ledger = spawn_ledger(100).await;
    ledger.insert_user(1, 100);
    let client = HttpLedgerClient::new(ledger.base_url());

    for user_id in ["abc", "1.1", "0", "2", ";DROP TABLE users;", "1/2", ".", ".."] {
        assert_eq!(
            client.user_details(user_id).await.unwrap(),
            UserDetailsOutcome::InvalidId(400),
            "user id {:?}",
            user_id
        );
    }

    let addr = spawn_fixed(404, "").await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));
    assert_eq!(
        client.user_details("1").await.unwrap(),
        UserDetailsOutcome::InvalidId(404)
    );
}

/// Tests that server errors and malformed bodies are client errors.
#[tokio::test]
async fn test_user_details_failures() {
    let addr = spawn_fixed(500, "").await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));
    assert!(matches!(
        client.user_details("1").await,
        Err(ClientError::UnexpectedStatus(500))
    ));

    let addr = spawn_fixed(200, r#"{"balance": 3}"#).await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));
    assert!(matches!(
        client.user_details("1").await,
        Err(ClientError::Decode(_))
    ));
}

/// Tests a transfer that goes through and the body the backend receives.
#[tokio::test]
async fn test_transfer_succeeds() {
    let ledger = spawn_ledger(100).await;
    ledger.insert_user(1, 100);
    ledger.insert_user(2, 100);
    let client = HttpLedgerClient::new(ledger.base_url());

    let outcome = client
        .transfer(&TransferRequest::new("1", "2", "20"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        TransferOutcome::Transferred(TransferResult {
            transfer_id: Scalar::from(1u64)
        })
    );
    assert_eq!(ledger.balance(1), Some(80));
    assert_eq!(ledger.balance(2), Some(120));
    assert_eq!(
        ledger.state.lock().unwrap().transfer_bodies,
        vec![json!({"userIdFrom": "1", "userIdTo": "2", "amount": "20"})]
    );
}

/// Tests that 400 responses carry the plain-text body as the reason.
#[tokio::test]
async fn test_transfer_rejections() {
    let ledger = spawn_ledger(100).await;
    ledger.insert_user(1, 10);
    ledger.insert_user(2, 10);
    let client = HttpLedgerClient::new(ledger.base_url());

    assert_eq!(
        client.transfer(&TransferRequest::new("1", "2", "50")).await.unwrap(),
        TransferOutcome::Rejected {
            reason: "Insufficient funds.".to_string()
        }
    );
    assert_eq!(
        client.transfer(&TransferRequest::new("1", "1", "5")).await.unwrap(),
        TransferOutcome::Rejected {
            reason: String::new()
        }
    );
    assert_eq!(
        client.transfer(&TransferRequest::new("1", "2", "-5")).await.unwrap(),
        TransferOutcome::Rejected {
            reason: String::new()
        }
    );
    assert_eq!(ledger.balance(1), Some(10));
}

/// Tests that other statuses on transfer are client errors.
#[tokio::test]
async fn test_transfer_unexpected_status() {
    let addr = spawn_fixed(503, "maintenance").await;
    let client = HttpLedgerClient::new(format!("http://{}", addr));

    assert!(matches!(
        client.transfer(&TransferRequest::new("1", "2", "3")).await,
        Err(ClientError::UnexpectedStatus(503))
    ));
}

/// Tests that an unreachable backend is a transport error.
#[tokio::test]
async fn test_unreachable_backend() {
    let client = HttpLedgerClient::new(unreachable_base_url());

    assert!(matches!(client.create_user().await, Err(ClientError::Transport(_))));
}
