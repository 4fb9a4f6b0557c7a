use super::*;

/// Tests the idle sweep.
///
/// Verifies that activity is measured from the last bump, falling back to creation time
/// for never-bumped communities.
///
/// Expected: Ok(2) with the stale bumped and stale unbumped communities deactivated
#[tokio::test]
async fn deactivates_stale_communities() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = now() - TimeDelta::days(30);

    let stale_bumped = CommunityFactory::new(db)
        .created_at(now() - TimeDelta::days(90))
        .last_bump_at(Some(now() - TimeDelta::days(31)))
        .build()
        .await?;
    let stale_unbumped = CommunityFactory::new(db)
        .created_at(now() - TimeDelta::days(31))
        .build()
        .await?;
    let recently_bumped = CommunityFactory::new(db)
        .created_at(now() - TimeDelta::days(90))
        .last_bump_at(Some(now() - TimeDelta::days(2)))
        .build()
        .await?;
    let fresh = CommunityFactory::new(db)
        .created_at(now() - TimeDelta::days(1))
        .build()
        .await?;

    let repo = CommunityRepository::new(db);

    assert_eq!(repo.deactivate_idle(cutoff, now()).await?, 2);

    for (model, expected_active) in [
        (stale_bumped, false),
        (stale_unbumped, false),
        (recently_bumped, true),
        (fresh, true),
    ] {
        let stored = entity::prelude::Community::find_by_id(model.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(stored.is_active, expected_active, "community {}", model.id);
    }

    Ok(())
}
