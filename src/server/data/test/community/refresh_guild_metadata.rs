use super::*;

/// Tests refreshing gateway metadata of a registered guild.
///
/// Expected: Ok(true) with name, icon and member count replaced
#[tokio::test]
async fn refreshes_registered_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db)
        .external_id("7007")
        .name("Before")
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let updated = repo
        .refresh_guild_metadata(
            GuildSnapshotParam {
                external_id: 7007,
                name: "After".to_string(),
                icon_url: Some("https://cdn.discordapp.com/icons/7007/abc.png".to_string()),
                member_count: 321,
            },
            now(),
        )
        .await?;

    assert!(updated);

    let community = repo.find_by_external_id(7007).await?.unwrap();
    assert_eq!(community.name, "After");
    assert_eq!(community.member_count, 321);
    assert!(community.icon_url.is_some());

    Ok(())
}

/// Tests refreshing a guild with no registry row.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unregistered_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommunityRepository::new(db);
    let updated = repo
        .refresh_guild_metadata(
            GuildSnapshotParam {
                external_id: 1,
                name: "Nobody".to_string(),
                icon_url: None,
                member_count: 1,
            },
            now(),
        )
        .await?;

    assert!(!updated);

    Ok(())
}
