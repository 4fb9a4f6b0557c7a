use super::*;

/// Tests a partial owner edit.
///
/// Verifies that only provided fields change and a negative member count is clamped.
///
/// Expected: Ok(Community) with new name and tags, original description
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = CommunityFactory::new(db)
        .owner_id("55")
        .tags(&["old"])
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let tags = Tags::normalize(["New", "Tags"])?;
    let community = repo
        .update(
            existing.id,
            UpdateCommunityParam {
                name: Some("Renamed".to_string()),
                member_count: Some(-5),
                ..Default::default()
            },
            Some(&tags),
            now(),
        )
        .await?;

    assert_eq!(community.name, "Renamed");
    assert_eq!(community.description, existing.description);
    assert_eq!(community.member_count, 0);
    assert_eq!(
        community.tags.as_slice(),
        &["new".to_string(), "tags".to_string()]
    );

    Ok(())
}

/// Tests soft-deleting a community.
///
/// Expected: Ok(true) and the row remains with is_active false
#[tokio::test]
async fn set_active_soft_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_community(db).await?;

    let repo = CommunityRepository::new(db);

    assert!(repo.set_active(existing.id, false, now()).await?);
    assert!(!repo.set_active(existing.id + 1000, false, now()).await?);

    let stored = entity::prelude::Community::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    Ok(())
}
