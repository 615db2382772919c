use sea_orm::{ConnectionTrait, DbErr, QueryResult, Statement};

use crate::database::Store;
use crate::requests::v1::auth::CredentialsForm;
use crate::responses::v1::auth::AuthResult;

/// Check credentials by splicing them straight into the SQL text
///
/// The form values are not escaped or bound, so they can rewrite the query.
/// Whatever the first returned row holds in its second column is greeted by
/// name. Store errors, including syntax errors caused by the input, are
/// reported back in the message.
#[::tracing::instrument(skip_all, fields(username = %request.username))]
pub async fn login(store: &Store, request: CredentialsForm) -> AuthResult {
    let query = format!(
        "SELECT * FROM users WHERE password = '{}' AND username = '{}'",
        request.password, request.username
    );

    ::tracing::debug!(%query, "Executing login query");

    let result = store
        .execute(|db| {
            Box::pin(async move {
                let statement = Statement::from_string(db.get_database_backend(), query);

                match db.query_one(statement).await? {
                    Some(row) => greeting_name(&row).map(Some),
                    None => Ok(None),
                }
            })
        })
        .await;

    match result {
        Ok(Some(username)) => {
            ::tracing::info!(matched = %username, "Login accepted");
            AuthResult::success(format!("Welcome {username}!"))
        }
        Ok(None) => {
            ::tracing::info!("Login rejected");
            AuthResult::invalid_credentials()
        }
        Err(e) => {
            ::tracing::warn!(error = %e, "Login query failed");
            AuthResult::failure(format!("Error: {e}"))
        }
    }
}

/// Render the second column of `row` whatever its storage class
///
/// NULL is shown as `None`.
fn greeting_name(row: &QueryResult) -> Result<String, DbErr> {
    if let Ok(text) = row.try_get_by_index::<Option<String>>(1) {
        return Ok(text.unwrap_or_else(|| "None".to_string()));
    }
    if let Ok(integer) = row.try_get_by_index::<Option<i64>>(1) {
        return Ok(integer.map_or_else(|| "None".to_string(), |n| n.to_string()));
    }

    row.try_get_by_index::<Option<f64>>(1)
        .map(|real| real.map_or_else(|| "None".to_string(), |n| n.to_string()))
}
