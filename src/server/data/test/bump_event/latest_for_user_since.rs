use super::*;

/// Tests finding the user's latest bump across communities.
///
/// Verifies that the most recent entry wins regardless of which community it targets.
///
/// Expected: Ok(Some(BumpEvent)) for the newer bump
#[tokio::test]
async fn returns_latest_across_communities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_community(db).await?;
    let second = factory::create_community(db).await?;
    factory::create_bump_event(db, first.id, "500", now() - TimeDelta::minutes(90)).await?;
    factory::create_bump_event(db, second.id, "500", now() - TimeDelta::minutes(10)).await?;

    let repo = BumpEventRepository::new(db);
    let latest = repo
        .latest_for_user_since(500, now() - TimeDelta::hours(2))
        .await?
        .unwrap();

    assert_eq!(latest.community_id, second.id);
    assert_eq!(latest.bumped_at, now() - TimeDelta::minutes(10));

    Ok(())
}

/// Tests the window bound and user filter.
///
/// Verifies that bumps older than `since` and bumps by other users are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_old_and_foreign_bumps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;
    factory::create_bump_event(db, community.id, "500", now() - TimeDelta::hours(3)).await?;
    factory::create_bump_event(db, community.id, "501", now() - TimeDelta::minutes(5)).await?;

    let repo = BumpEventRepository::new(db);
    let latest = repo
        .latest_for_user_since(500, now() - TimeDelta::hours(2))
        .await?;

    assert!(latest.is_none());

    Ok(())
}
