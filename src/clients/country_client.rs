//! # Country Client
//!
//! Provides a high-level API for interacting with the `Country` actor.
//! It wraps a `ResourceClient<Country>` and exposes domain-specific methods.
use crate::country_actor::CountryError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Country, CountryCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Country actor.
#[derive(Clone)]
pub struct CountryClient {
    inner: ResourceClient<Country>,
}

impl CountryClient {
    pub fn new(inner: ResourceClient<Country>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Country> for CountryClient {
    type Error = CountryError;

    fn inner(&self) -> &ResourceClient<Country> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::IdSpaceExhausted(last) => CountryError::IdSpaceExhausted(last),
            FrameworkError::EntityError(inner) => match inner.downcast::<CountryError>() {
                Ok(country_error) => *country_error,
                Err(other) => CountryError::ActorCommunicationError(other.to_string()),
            },
            other => CountryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CountryClient {
    /// Appends a country and returns it as stored, with its assigned id.
    #[instrument(skip(self, params))]
    pub async fn add_country(&self, params: CountryCreate) -> Result<Country, CountryError> {
        debug!(fields = params.0.len(), "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every country, in the order it was added.
    pub async fn list_countries(&self) -> Result<Vec<Country>, CountryError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, MockClient};
    use crate::model::{seed_countries, CountryId};
    use serde_json::json;

    #[tokio::test]
    async fn test_add_country_forwards_payload_unchanged() {
        let (client, mut receiver) = create_mock_client::<Country>(10);
        let country_client = CountryClient::new(client);

        let add_task = tokio::spawn(async move {
            let payload = CountryCreate::try_from(json!({"id": 999, "name": "X"})).unwrap();
            country_client.add_country(payload).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");

        // The client does not touch the id; the actor assigns it.
        assert_eq!(params.0.get("id"), Some(&json!(999)));
        responder
            .send(Ok(Country::with_id(CountryId(4), params.0)))
            .unwrap();

        let stored = add_task.await.unwrap().unwrap();
        assert_eq!(stored.id(), CountryId(4));
    }

    #[tokio::test]
    async fn test_list_countries_returns_actor_order() {
        let mut mock = MockClient::<Country>::new();
        mock.expect_list().return_ok(seed_countries());

        let country_client = CountryClient::new(mock.client());
        let countries = country_client.list_countries().await.unwrap();

        let names: Vec<_> = countries.iter().filter_map(|c| c.get("name")).collect();
        assert_eq!(names, vec!["Thailand", "Australia", "Egypt"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_exhausted_ids_map_to_domain_error() {
        let mut mock = MockClient::<Country>::new();
        mock.expect_create()
            .return_err(FrameworkError::IdSpaceExhausted("4294967295".into()));

        let country_client = CountryClient::new(mock.client());
        let result = country_client.add_country(CountryCreate::default()).await;

        assert_eq!(
            result,
            Err(CountryError::IdSpaceExhausted("4294967295".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Country>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CountryError::InvalidPayload("bad".into()),
            )));

        let country_client = CountryClient::new(mock.client());
        let result = country_client.add_country(CountryCreate::default()).await;

        assert_eq!(result, Err(CountryError::InvalidPayload("bad".into())));
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Country>(1);
        drop(receiver);

        let result = CountryClient::new(client).list_countries().await;
        assert!(matches!(
            result,
            Err(CountryError::ActorCommunicationError(_))
        ));
    }
}
