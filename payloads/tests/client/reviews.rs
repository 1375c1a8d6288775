use jiff::Timestamp;
use payloads::{ClientError, Review, ReviewId, requests};
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_and_list_reviews() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let studio = app.create_space("Studio", dec!(300));
    let attic = app.create_space("Attic", dec!(90));

    let review = app
        .client
        .create_review(&requests::CreateReview {
            space_id: studio.id,
            rating: 4,
            comment: Some("Lovely light".into()),
        })
        .await?;
    assert_eq!(review.user_id, alice.id);
    assert_eq!(review.rating, 4);

    let listed = app.client.list_reviews_for_space(&studio.id).await?;
    assert_eq!(listed, vec![review]);
    assert!(app.client.list_reviews_for_space(&attic.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn invalid_review_rejected() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.create_alice_user().await?;
    let studio = app.create_space("Studio", dec!(300));

    let result = app
        .client
        .create_review(&requests::CreateReview {
            space_id: studio.id,
            rating: 9,
            comment: None,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn only_the_author_edits_or_deletes() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.create_alice_user().await?;
    let studio = app.create_space("Studio", dec!(300));
    let review = app
        .client
        .create_review(&requests::CreateReview {
            space_id: studio.id,
            rating: 2,
            comment: None,
        })
        .await?;

    let edited = app
        .client
        .update_review(
            &review.id,
            &requests::UpdateReview {
                rating: 3,
                comment: Some("Better on a second visit".into()),
            },
        )
        .await?;
    assert_eq!(edited.rating, 3);

    // bob can neither edit nor delete alice's review
    app.create_bob_user().await?;
    let result = app
        .client
        .update_review(
            &review.id,
            &requests::UpdateReview {
                rating: 1,
                comment: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ClientError::NotFound)));
    app.client.delete_review(&review.id).await?;
    assert_eq!(app.client.list_reviews_for_space(&studio.id).await?.len(), 1);

    // alice can
    app.sign_in("alice@example.com", "supersecret").await?;
    app.client.delete_review(&review.id).await?;
    assert!(app.client.list_reviews_for_space(&studio.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn reviews_are_listed_newest_first() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    let alice = app.create_alice_user().await?;
    let studio = app.create_space("Studio", dec!(300));

    // Same second; only the fractional digits tell them apart.
    let written_at = |at: &str| -> anyhow::Result<Timestamp> { Ok(at.parse()?) };
    for (comment, created_at) in [
        ("first", written_at("2025-01-01T09:30:00.12Z")?),
        ("third", written_at("2025-01-01T09:30:01Z")?),
        ("second", written_at("2025-01-01T09:30:00.123Z")?),
    ] {
        app.backend.insert_review(Review {
            id: ReviewId::new_v4(),
            space_id: studio.id,
            user_id: alice.id,
            rating: 4,
            comment: Some(comment.into()),
            created_at,
        });
    }

    let listed = app.client.list_reviews_for_space(&studio.id).await?;
    let comments: Vec<_> =
        listed.iter().filter_map(|r| r.comment.as_deref()).collect();
    assert_eq!(comments, vec!["third", "second", "first"]);

    Ok(())
}
