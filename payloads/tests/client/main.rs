mod auth;
mod payments;
mod reservations;
mod reviews;
mod spaces;

use payloads::ClientError;
use test_helpers::spawn_app;

#[tokio::test]
async fn requests_without_project_key_are_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let client = payloads::APIClient::new(app.address(), "wrong-key");
    let result = client.list_spaces().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    Ok(())
}
