//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, state::State, users::models::UserResponse};

/// Get User Handler
///
/// Looks a user up by external id. An unknown uid yields a 200 with a
/// JSON null body, not a 404; the storefront account screen probes for
/// registration this way.
#[endpoint(tags("users"), summary = "Get User")]
pub(crate) async fn handler(
    uid: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Option<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state.users.find_user_by_uid(&uid.into_inner()).await?;

    Ok(Json(user.map(Into::into)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        test_helpers::{make_user, users_service},
        users::MockUsersRepository,
    };

    use super::*;

    fn make_service(users: MockUsersRepository) -> Service {
        users_service(users, Router::with_path("api/users/{uid}").get(handler))
    }

    #[tokio::test]
    async fn test_get_user_returns_200() -> TestResult {
        let mut users = MockUsersRepository::new();

        users
            .expect_find_user_by_uid()
            .once()
            .withf(|uid| uid == "abc123")
            .return_once(|_| Ok(Some(make_user("abc123"))));

        users.expect_create_user().never();
        users.expect_list_users().never();
        users.expect_upsert_user().never();
        users.expect_delete_user().never();

        let mut res = TestClient::get("http://example.com/api/users/abc123")
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uid, "abc123");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_user_returns_null_body() -> TestResult {
        let mut users = MockUsersRepository::new();

        users
            .expect_find_user_by_uid()
            .once()
            .withf(|uid| uid == "nobody")
            .return_once(|_| Ok(None));

        users.expect_create_user().never();
        users.expect_list_users().never();
        users.expect_upsert_user().never();
        users.expect_delete_user().never();

        let mut res = TestClient::get("http://example.com/api/users/nobody")
            .send(&make_service(users))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, "null");

        Ok(())
    }
}
