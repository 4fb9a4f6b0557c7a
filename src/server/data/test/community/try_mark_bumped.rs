use super::*;

/// Tests claiming the bump window of a never-bumped community.
///
/// Expected: Ok(true) and last_bump_at set to now
#[tokio::test]
async fn claims_window_when_never_bumped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = CommunityFactory::new(db).external_id("6001").build().await?;

    let repo = CommunityRepository::new(db);

    assert!(repo.try_mark_bumped(6001, now()).await?);

    let stored = entity::prelude::Community::find_by_id(community.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_bump_at, Some(now()));

    Ok(())
}

/// Tests claiming the window while the community is cooling down.
///
/// Verifies that the conditional write leaves the row untouched.
///
/// Expected: Ok(false) and last_bump_at unchanged
#[tokio::test]
async fn refuses_inside_cooldown_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bumped_at = now() - TimeDelta::minutes(59);
    let community = CommunityFactory::new(db)
        .external_id("6002")
        .last_bump_at(Some(bumped_at))
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert!(!repo.try_mark_bumped(6002, now()).await?);

    let stored = entity::prelude::Community::find_by_id(community.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_bump_at, Some(bumped_at));

    Ok(())
}

/// Tests claiming the window exactly one hour after the last bump.
///
/// Expected: Ok(true)
#[tokio::test]
async fn claims_window_at_exact_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("6003")
        .last_bump_at(Some(now() - TimeDelta::hours(1)))
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert!(repo.try_mark_bumped(6003, now()).await?);

    Ok(())
}

/// Tests claiming the window of a deactivated or unknown community.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_inactive_or_unknown_community() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("6004")
        .active(false)
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert!(!repo.try_mark_bumped(6004, now()).await?);
    assert!(!repo.try_mark_bumped(6005, now()).await?);

    Ok(())
}
