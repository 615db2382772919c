pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_posts;
mod m20240601_000003_seed_demo_data;

pub use m20240601_000001_create_users::User;
pub use m20240601_000002_create_posts::Post;
pub use m20240601_000003_seed_demo_data::{POSTS as SEED_POSTS, USERS as SEED_USERS};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_posts::Migration),
            Box::new(m20240601_000003_seed_demo_data::Migration),
        ]
    }
}
