use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokedexEvolutionChain::Table)
                    .if_not_exists()
                    .col(pk_auto(PokedexEvolutionChain::Id))
                    .col(big_integer_uniq(PokedexEvolutionChain::ChainId))
                    .col(json(PokedexEvolutionChain::Data))
                    .col(timestamp(PokedexEvolutionChain::CreatedAt))
                    .col(timestamp(PokedexEvolutionChain::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PokedexEvolutionChain::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PokedexEvolutionChain {
    Table,
    Id,
    ChainId,
    Data,
    CreatedAt,
    UpdatedAt,
}
