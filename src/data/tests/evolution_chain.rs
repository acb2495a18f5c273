use super::*;

/// Expect Ok when storing a chain document that is not yet known.
#[tokio::test]
async fn creates_new_chain_document() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let repository = EvolutionChainRepository::new(&test.db);

    let document = factory::mock_chain(
        5,
        factory::chain_node("bulbasaur", vec![factory::chain_node("ivysaur", vec![])]),
    );

    let result = repository.upsert(5, document.clone()).await;

    assert!(result.is_ok());

    let model = result.unwrap();
    assert_eq!(model.chain_id, 5);
    assert_eq!(model.data, document);

    Ok(())
}

/// Expect Ok when storing a chain ID again, refreshing the stored document.
#[tokio::test]
async fn updates_existing_chain_document() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let repository = EvolutionChainRepository::new(&test.db);

    let original = factory::mock_chain(5, factory::chain_node("bulbasaur", vec![]));
    let refreshed = factory::mock_chain(
        5,
        factory::chain_node("bulbasaur", vec![factory::chain_node("ivysaur", vec![])]),
    );

    let first = repository.upsert(5, original).await?;
    let second = repository.upsert(5, refreshed.clone()).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.data, refreshed);

    let rows = PokedexEvolutionChain::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect get_by_chain_id to return None for chain IDs never stored.
#[tokio::test]
async fn returns_none_for_unknown_chain_id() -> Result<(), TestError> {
    let test = test_setup_with_pokedex_tables!()?;
    let repository = EvolutionChainRepository::new(&test.db);

    let found = repository.get_by_chain_id(404).await?;
    assert!(found.is_none());

    Ok(())
}
