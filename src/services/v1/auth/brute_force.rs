use crate::database::Store;
use crate::entities::v1::users::Model;
use crate::errors::Error;
use crate::requests::v1::auth::CredentialsForm;
use crate::responses::v1::auth::AuthResult;

/// Check credentials with bound parameters
///
/// Nothing limits how often this can be called: no attempt counter,
/// no delay, no lockout.
#[::tracing::instrument(skip_all, fields(username = %request.username))]
pub async fn brute_force(store: &Store, request: CredentialsForm) -> Result<AuthResult, Error> {
    let CredentialsForm { username, password } = request;

    let user = store
        .execute(|db| {
            Box::pin(async move { Model::find_by_credentials(db, &username, &password).await })
        })
        .await?;

    Ok(match user {
        Some(_) => AuthResult::success("Login successful!"),
        None => AuthResult::invalid_credentials(),
    })
}
