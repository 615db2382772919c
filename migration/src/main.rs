use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(vulnerable_app_migration::Migrator).await;
}
