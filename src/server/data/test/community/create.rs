use super::*;

/// Tests registering a new community.
///
/// Verifies that the row starts active and never bumped with creation timestamps set.
///
/// Expected: Ok(Community) with is_active and no last_bump_at
#[tokio::test]
async fn creates_active_unbumped_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommunityRepository::new(db);
    let tags = Tags::normalize(["Rust", "rust", "GameDev"])?;
    let community = repo.create(55, create_param(9001), &tags, now()).await?;

    assert_eq!(community.external_id, 9001);
    assert_eq!(community.owner_id, 55);
    assert!(community.is_active);
    assert_eq!(community.last_bump_at, None);
    assert_eq!(community.created_at, now());
    assert_eq!(
        community.tags.as_slice(),
        &["rust".to_string(), "gamedev".to_string()]
    );

    Ok(())
}

/// Tests registering a guild that already has a row.
///
/// Verifies that `external_id` uniqueness holds across active and inactive rows.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_external_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("9002")
        .active(false)
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let result = repo
        .create(55, create_param(9002), &Tags::default(), now())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests reactivating a soft-deleted community.
///
/// Verifies that metadata is refreshed while identity and bump history are preserved.
///
/// Expected: Ok(Community) active with the original last_bump_at
#[tokio::test]
async fn reactivates_with_fresh_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bumped_at = now() - TimeDelta::days(40);
    let existing = CommunityFactory::new(db)
        .external_id("9003")
        .owner_id("55")
        .name("Old name")
        .active(false)
        .last_bump_at(Some(bumped_at))
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let tags = Tags::normalize(["rust"])?;
    let community = repo
        .reactivate(existing.id, create_param(9003), &tags, now())
        .await?;

    assert!(community.is_active);
    assert_eq!(community.id, existing.id);
    assert_eq!(community.name, "Rustaceans");
    assert_eq!(community.owner_id, 55);
    assert_eq!(community.last_bump_at, Some(bumped_at));
    assert_eq!(community.updated_at, now());

    Ok(())
}

/// Tests counting active communities per owner.
///
/// Verifies that inactive rows and other owners' rows are excluded.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_active_rows_of_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db).owner_id("55").build().await?;
    CommunityFactory::new(db).owner_id("55").build().await?;
    CommunityFactory::new(db)
        .owner_id("55")
        .active(false)
        .build()
        .await?;
    CommunityFactory::new(db).owner_id("56").build().await?;

    let repo = CommunityRepository::new(db);

    assert_eq!(repo.count_active_by_owner(55).await?, 2);
    assert_eq!(repo.get_by_owner(55).await?.len(), 3);

    Ok(())
}
