use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;

/// Game Sessions (one row per lottery play)
#[derive(DeriveIden)]
enum GameSessions {
    Table,
    Id,
    UserId,
    SelectedNumbers,
    WinningNumbers,
    IsWinner,
    PlayedAt,
    ConfirmedAt,
    PrizeAmountCents,
}

/// Approved ONGs (vetted charities eligible for a share of proceeds)
#[derive(DeriveIden)]
enum ApprovedOngs {
    Table,
    Id,
    Name,
    Description,
    Mission,
    Color,
    Icon,
    Website,
    IsActive,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Session rows start pending (winning_numbers NULL) and are stamped exactly
/// once when a draw is confirmed; they are never deleted.
///
/// The ONG table is seeded with the starter charities. Administration happens
/// out of band; the query layer only ever reads it.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::UserId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::SelectedNumbers)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::WinningNumbers)
                            .string_len(16)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::IsWinner)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(GameSessions::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(GameSessions::ConfirmedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameSessions::PrizeAmountCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // taken-numbers / latest-activity scan over pending rows by time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_sessions_winning_played")
                    .table(GameSessions::Table)
                    .col(GameSessions::WinningNumbers)
                    .col(GameSessions::PlayedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_sessions_user")
                    .table(GameSessions::Table)
                    .col(GameSessions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApprovedOngs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApprovedOngs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApprovedOngs::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ApprovedOngs::Description).text().not_null())
                    .col(ColumnDef::new(ApprovedOngs::Mission).text().not_null())
                    .col(
                        ColumnDef::new(ApprovedOngs::Color)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApprovedOngs::Icon)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApprovedOngs::Website)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApprovedOngs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ApprovedOngs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_approved_ongs_name_unique")
                    .table(ApprovedOngs::Table)
                    .col(ApprovedOngs::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Starter charities. Name is unique so re-running the migration on an
        // existing database is a no-op.
        let conn = manager.get_connection();
        let insert_sql = r#"
INSERT INTO approved_ongs (name, description, mission, color, icon, website, is_active)
VALUES
 ('Cruz Roja', 'Humanitarian relief organization', 'Emergency response and disaster relief', '#E53935', 'cross', 'https://www.cruzroja.org', TRUE),
 ('Techo', 'Housing for families in informal settlements', 'Overcome poverty in slums across Latin America', '#1E88E5', 'home', 'https://www.techo.org', TRUE),
 ('Banco de Alimentos', 'Food bank network', 'Rescue food and deliver it to community kitchens', '#43A047', 'food', 'https://www.bancodealimentos.org.ar', TRUE),
 ('Fundacion Garrahan', 'Children''s hospital foundation', 'Support pediatric healthcare and research', '#FDD835', 'heart', 'https://www.fundaciongarrahan.org.ar', TRUE)
ON CONFLICT (name) DO NOTHING;
"#;
        conn.execute(Statement::from_string(
            manager.get_database_backend(),
            insert_sql.to_string(),
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(GameSessions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ApprovedOngs::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
