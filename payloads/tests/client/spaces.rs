use payloads::{ClientError, SpaceId};
use rust_decimal::dec;

use test_helpers::spawn_app;

#[tokio::test]
async fn spaces_are_listed_by_name() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_space("Studio", dec!(300));
    app.create_space("Attic", dec!(90));
    app.create_space("Meeting room", dec!(250));

    let names: Vec<_> = app
        .client
        .list_spaces()
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Attic", "Meeting room", "Studio"]);

    Ok(())
}

#[tokio::test]
async fn get_space_by_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let studio = app.create_space("Studio", dec!(300));
    app.create_space("Attic", dec!(90));

    let fetched = app.client.get_space(&studio.id).await?;
    assert_eq!(fetched, studio);

    let missing = app.client.get_space(&SpaceId::new_v4()).await;
    assert!(matches!(missing, Err(ClientError::NotFound)));

    Ok(())
}
