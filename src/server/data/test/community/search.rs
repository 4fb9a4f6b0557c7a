use super::*;

fn search_param(keywords: &[&str], sort: CommunitySort) -> SearchCommunitiesParam {
    SearchCommunitiesParam {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        sort,
        page: 0,
        per_page: 10,
    }
}

/// Tests searching without keywords.
///
/// Verifies that every active community is returned, inactive ones are hidden and
/// never-bumped communities sort after bumped ones.
///
/// Expected: Ok with bumped communities newest first, then never-bumped
#[tokio::test]
async fn lists_active_by_last_bump_with_unbumped_last() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let never = CommunityFactory::new(db).build().await?;
    let older = CommunityFactory::new(db)
        .last_bump_at(Some(now() - TimeDelta::hours(5)))
        .build()
        .await?;
    let newer = CommunityFactory::new(db)
        .last_bump_at(Some(now() - TimeDelta::hours(1)))
        .build()
        .await?;
    CommunityFactory::new(db)
        .active(false)
        .last_bump_at(Some(now()))
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let (communities, total) = repo
        .search(&search_param(&[], CommunitySort::LastBump))
        .await?;

    let ids: Vec<i32> = communities.iter().map(|c| c.id).collect();
    assert_eq!(total, 3);
    assert_eq!(ids, vec![newer.id, older.id, never.id]);

    Ok(())
}

/// Tests keyword matching against tags.
///
/// Verifies that a keyword must equal a whole tag; substrings of tags do not match.
///
/// Expected: Ok with only the community carrying the exact tag
#[tokio::test]
async fn matches_whole_tags_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let anime = CommunityFactory::new(db)
        .name("A")
        .tags(&["anime", "art"])
        .build()
        .await?;
    CommunityFactory::new(db)
        .name("B")
        .tags(&["games"])
        .build()
        .await?;
    CommunityFactory::new(db)
        .name("C")
        .tags(&["animework"])
        .build()
        .await?;

    let repo = CommunityRepository::new(db);
    let (communities, total) = repo
        .search(&search_param(&["anime"], CommunitySort::Name))
        .await?;

    let ids: Vec<i32> = communities.iter().map(|c| c.id).collect();
    assert_eq!(total, 1);
    assert_eq!(ids, vec![anime.id]);

    Ok(())
}

/// Tests a query with several keywords.
///
/// Verifies that a community must carry every keyword as a tag to match.
///
/// Expected: Ok with only the community tagged with both keywords
#[tokio::test]
async fn requires_every_keyword_as_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let both = CommunityFactory::new(db)
        .tags(&["anime", "games"])
        .build()
        .await?;
    CommunityFactory::new(db).tags(&["anime"]).build().await?;
    CommunityFactory::new(db).tags(&["games"]).build().await?;

    let repo = CommunityRepository::new(db);
    let (communities, total) = repo
        .search(&search_param(&["anime", "games"], CommunitySort::LastBump))
        .await?;

    let ids: Vec<i32> = communities.iter().map(|c| c.id).collect();
    assert_eq!(total, 1);
    assert_eq!(ids, vec![both.id]);

    Ok(())
}

/// Tests that LIKE wildcards in keywords are matched literally.
///
/// Expected: Ok with no results for "%"
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db).tags(&["anime"]).build().await?;

    let repo = CommunityRepository::new(db);
    let (communities, total) = repo
        .search(&search_param(&["%"], CommunitySort::LastBump))
        .await?;

    assert_eq!(total, 0);
    assert!(communities.is_empty());

    Ok(())
}

/// Tests member count ordering and pagination.
///
/// Expected: Ok with the second page holding the smallest community
#[tokio::test]
async fn paginates_by_member_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bump_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CommunityFactory::new(db).member_count(300).build().await?;
    let smallest = CommunityFactory::new(db).member_count(10).build().await?;
    CommunityFactory::new(db).member_count(5000).build().await?;

    let repo = CommunityRepository::new(db);
    let (communities, total) = repo
        .search(&SearchCommunitiesParam {
            keywords: Vec::new(),
            sort: CommunitySort::MemberCount,
            page: 1,
            per_page: 2,
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0].id, smallest.id);

    Ok(())
}
