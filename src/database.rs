//! Document store connection management and shared store types.

use mongodb::{
    Client, Database,
    bson::{Bson, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, Credential, ServerApi, ServerApiVersion},
    results::UpdateResult,
};
use salvo::http::StatusError;
use thiserror::Error;
use tracing::error;

use crate::config::db::DatabaseConfig;

/// Server error code for a unique key collision.
const DUPLICATE_KEY_CODE: i32 = 11_000;

/// Failure of a single document store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a document with the same key already exists")]
    DuplicateKey,

    #[error("storage error")]
    Store(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_duplicate_key(&error) {
            Self::DuplicateKey
        } else {
            Self::Store(error)
        }
    }
}

impl From<StoreError> for StatusError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateKey => {
                StatusError::conflict().brief("Document already exists")
            }
            StoreError::Store(source) => {
                error!("document store operation failed: {source}");

                StatusError::internal_server_error()
            }
        }
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// Result of an upsert-style update, as acknowledged by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Number of documents matched by the filter.
    pub matched_count: u64,

    /// Number of documents actually modified.
    pub modified_count: u64,

    /// Identifier of a freshly inserted document, when the filter matched nothing.
    pub upserted_id: Option<ObjectId>,
}

impl From<UpdateResult> for UpsertOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().and_then(Bson::as_object_id),
        }
    }
}

/// Connect to the document store and select the configured database.
///
/// The client is pinned to Stable API v1 with strict mode, and credentials
/// from the environment override anything embedded in the connection string.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed or the client
/// cannot be constructed.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.database_url).await?;

    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    options.app_name = Some(env!("CARGO_PKG_NAME").to_owned());

    if let (Some(username), Some(password)) =
        (&config.database_user, &config.database_password)
    {
        options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(options)?;

    Ok(client.database(&config.database_name))
}
