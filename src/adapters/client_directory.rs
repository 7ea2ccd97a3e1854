use crate::core::{Client, ClientId, ClientLookup, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// Client lookup over a fixed set of clients, usually the `[[clients]]` table of
/// the configuration file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientDirectory {
    clients: HashMap<ClientId, Client>,
}

impl InMemoryClientDirectory {
    /// Later entries replace earlier ones with the same id.
    pub fn new(clients: impl IntoIterator<Item = Client>) -> Self {
        Self {
            clients: clients.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientLookup for InMemoryClientDirectory {
    async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>> {
        let client = self.clients.get(&id).cloned();
        if client.is_none() {
            tracing::debug!("No client with id {}", id);
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClientTier;

    #[tokio::test]
    async fn test_lookup_by_id() {
        let directory = InMemoryClientDirectory::new(vec![
            Client {
                id: ClientId(1),
                name: "Kowalski".to_string(),
                tier: ClientTier::Standard,
            },
            Client {
                id: ClientId(2),
                name: "Malewski".to_string(),
                tier: ClientTier::VeryImportant,
            },
        ]);

        assert_eq!(directory.len(), 2);
        let found = directory.get_by_id(ClientId(2)).await.unwrap().unwrap();
        assert_eq!(found.name, "Malewski");
        assert_eq!(found.tier, ClientTier::VeryImportant);
        assert!(directory.get_by_id(ClientId(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_directory_finds_nothing() {
        let directory = InMemoryClientDirectory::new(Vec::new());

        assert!(directory.is_empty());
        assert!(directory.get_by_id(ClientId(1)).await.unwrap().is_none());
    }
}
