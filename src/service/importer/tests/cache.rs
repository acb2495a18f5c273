use super::*;

/// Expect a repeated resolve to reuse the cached ID without a second row.
#[tokio::test]
async fn returns_cached_id_without_new_rows() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let mut cache = ReferenceCache::new();

    let first = cache.resolve_type(&test.db, "grass").await?;
    let second = cache.resolve_type(&test.db, "grass").await?;

    assert_eq!(first, second);
    assert_eq!(PokedexType::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect the same name to resolve independently per tag kind.
#[tokio::test]
async fn resolves_each_kind_independently() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let mut cache = ReferenceCache::new();

    cache.resolve_type(&test.db, "speed").await?;
    cache.resolve_ability(&test.db, "speed").await?;
    cache.resolve_stat(&test.db, "speed").await?;

    assert_eq!(PokedexType::find().all(&test.db).await?.len(), 1);
    assert_eq!(PokedexAbility::find().all(&test.db).await?.len(), 1);
    assert_eq!(PokedexStat::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect IDs cached before a commit to stay valid for later transactions.
#[tokio::test]
async fn keeps_cache_across_committed_transactions() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let mut cache = ReferenceCache::new();

    let txn = test.db.begin().await?;
    let inside = cache.resolve_type(&txn, "grass").await?;
    txn.commit().await?;

    let outside = cache.resolve_type(&test.db, "grass").await?;

    assert_eq!(inside, outside);
    assert_eq!(PokedexType::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect clear() to forget IDs created in a rolled-back transaction so the
/// next resolve recreates the row instead of pointing at a dead ID.
#[tokio::test]
async fn clear_recovers_from_rolled_back_entries() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let mut cache = ReferenceCache::new();

    let txn = test.db.begin().await?;
    cache.resolve_type(&txn, "grass").await?;
    txn.rollback().await?;

    cache.clear();

    let recreated = cache.resolve_type(&test.db, "grass").await?;

    let rows = PokedexType::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, recreated);
    assert_eq!(rows[0].name, "grass");

    Ok(())
}
