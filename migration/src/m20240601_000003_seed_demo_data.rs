use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::{m20240601_000001_create_users::User, m20240601_000002_create_posts::Post};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (username, password, email)
pub const USERS: [(&str, &str, &str); 2] = [
    ("admin", "admin123", "admin@example.com"),
    ("user1", "password123", "user1@example.com"),
];

/// (title, content, index into `USERS` of the owner)
pub const POSTS: [(&str, &str, usize); 2] = [
    ("Welcome", "This is a vulnerable application for testing", 0),
    ("Test Post", "This is a test post", 1),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        let count = Query::select()
            .expr_as(
                Func::count(Expr::col((User::Table, User::Id))),
                Alias::new("count"),
            )
            .from(User::Table)
            .to_owned();

        let existing: i64 = match db.query_one(backend.build(&count)).await? {
            Some(row) => row.try_get("", "count")?,
            None => 0,
        };

        if existing > 0 {
            ::tracing::info!(users = existing, "Store already populated, skipping seed data");
            return Ok(());
        }

        let mut ids = Vec::with_capacity(USERS.len());

        for (username, password, email) in USERS {
            let insert = Query::insert()
                .into_table(User::Table)
                .columns([User::Username, User::Password, User::Email])
                .values_panic([username.into(), password.into(), email.into()])
                .to_owned();

            let result = db.execute(backend.build(&insert)).await?;

            ids.push(result.last_insert_id());
        }

        let mut posts = Query::insert()
            .into_table(Post::Table)
            .columns([Post::Title, Post::Content, Post::UserId])
            .to_owned();

        for (title, content, owner) in POSTS {
            posts = posts
                .values_panic([title.into(), content.into(), ids[owner].into()])
                .to_owned();
        }

        manager.exec_stmt(posts).await?;

        ::tracing::info!(
            users = USERS.len(),
            posts = POSTS.len(),
            "Seeded demo data"
        );

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (title, _, _) in POSTS {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Post::Table)
                        .and_where(Expr::col(Post::Title).eq(title))
                        .to_owned(),
                )
                .await?;
        }

        for (username, _, _) in USERS {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(User::Table)
                        .and_where(Expr::col(User::Username).eq(username))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
