use super::*;

/// Tests appending a ledger entry.
///
/// Expected: Ok(BumpEvent) and the community's ledger count grows by one
#[tokio::test]
async fn appends_ledger_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let community = factory::create_community(db).await?;

    let repo = BumpEventRepository::new(db);
    let event = repo.create(community.id, 31337, now()).await?;

    assert_eq!(event.community_id, community.id);
    assert_eq!(event.user_id, 31337);
    assert_eq!(event.bumped_at, now());
    assert_eq!(repo.count_by_community(community.id).await?, 1);

    Ok(())
}
