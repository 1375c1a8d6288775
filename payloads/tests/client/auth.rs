use payloads::{ClientError, requests};
use reqwest::StatusCode;

use test_helpers::{alice_credentials, assert_status_code, spawn_app};

#[tokio::test]
async fn sign_in_refused() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.create_alice_user().await?;

    let body = requests::SignIn {
        email: "alice@example.com".into(),
        password: "not-her-password".into(),
    };
    let result = app.anonymous_client().sign_in(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn sign_in_then_current_user() -> anyhow::Result<()> {
    let mut app = spawn_app().await;

    let alice = app.create_alice_user().await?;
    assert!(app.client.is_signed_in());

    let current = app.client.current_user().await?;
    assert_eq!(current, alice);
    assert_eq!(current.email, alice_credentials().email);

    Ok(())
}

#[tokio::test]
async fn anonymous_client_has_no_user() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.current_user().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    Ok(())
}

#[tokio::test]
async fn sign_out_revokes_the_token() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.create_alice_user().await?;

    app.client.sign_out().await?;

    let result = app.client.current_user().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    Ok(())
}
