//! DynamoDB repository implementation.
//!
//! Implements `NoteRepository` from `notebox_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use notebox_core::notes::Note;
use notebox_core::storage::{NoteRepository, Result};

use crate::config::Config;

use super::conversions::{item_to_note, note_to_item, NOTE_ID_ATTR, OWNER_ATTR};
use super::error::{map_put_item_error, map_query_error};

/// DynamoDB-based repository implementation.
///
/// The client is cheap to clone and safe to share, so one repository is
/// built at startup and reused by every request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. `DYNAMODB_ENDPOINT_URL`
    /// points the client at DynamoDB Local or another compatible endpoint.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint_url) = &config.dynamodb_endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.table_name,
            endpoint = config.dynamodb_endpoint_url.as_deref(),
            "Using DynamoDB storage"
        );

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl NoteRepository for DynamoDbRepository {
    async fn create_note(&self, note: &Note) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_to_item(note)))
            .condition_expression("attribute_not_exists(#owner) AND attribute_not_exists(#note)")
            .expression_attribute_names("#owner", OWNER_ATTR)
            .expression_attribute_names("#note", NOTE_ID_ATTR)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, format!("{}/{}", note.owner_id, note.note_id)))?;

        Ok(())
    }

    async fn get_notes_by_owner(&self, owner_id: &str) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        let mut start_key = None;

        // Follow LastEvaluatedKey so callers always see the whole partition.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#owner = :owner")
                .expression_attribute_names("#owner", OWNER_ATTR)
                .expression_attribute_values(":owner", AttributeValue::S(owner_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                notes.push(item_to_note(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(notes)
    }
}
