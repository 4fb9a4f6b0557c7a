use super::*;

/// Tests finding a registered community by guild ID.
///
/// Verifies that the stored guild and owner IDs are parsed back into u64 and the tag
/// column is decoded.
///
/// Expected: Ok(Some(Community))
#[tokio::test]
async fn finds_registered_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("4242")
        .owner_id("77")
        .tags(&["rust", "gamedev"])
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let community = repo.find_by_external_id(4242).await?.unwrap();

    assert_eq!(community.external_id, 4242);
    assert_eq!(community.owner_id, 77);
    assert_eq!(
        community.tags.as_slice(),
        &["rust".to_string(), "gamedev".to_string()]
    );

    Ok(())
}

/// Tests the active-only lookup with a deactivated community.
///
/// Verifies that the unfiltered lookup still returns the row while the bump-path lookup
/// treats it as absent.
///
/// Expected: Some for find_by_external_id, None for find_active_by_external_id
#[tokio::test]
async fn active_lookup_skips_inactive_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("4343")
        .owner_id("77")
        .active(false)
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert!(repo.find_by_external_id(4343).await?.is_some());
    assert!(repo.find_active_by_external_id(4343).await?.is_none());

    Ok(())
}

/// Tests looking up a guild that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommunityRepository::new(db);

    assert!(repo.find_by_external_id(1).await?.is_none());
    assert!(repo.find_active_by_external_id(1).await?.is_none());

    Ok(())
}

/// Tests reading a row whose owner column is not a Discord ID.
///
/// Verifies that corrupt stored IDs surface as an internal error instead of a panic.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_corrupt_owner_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("4444")
        .owner_id("not-a-snowflake")
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let result = repo.find_by_external_id(4444).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests reading back a community created with every factory default.
///
/// Verifies that the default guild and owner IDs parse as Discord IDs.
///
/// Expected: Ok(Some(Community))
#[tokio::test]
async fn reads_factory_default_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_community(db).await?;
    let external_id: u64 = entity.external_id.parse().unwrap();

    let repo = CommunityRepository::new(db);
    let community = repo.find_by_external_id(external_id).await?.unwrap();

    assert_eq!(community.id, entity.id);
    assert_eq!(community.owner_id.to_string(), entity.owner_id);

    Ok(())
}
