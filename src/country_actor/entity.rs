//! [`ActorEntity`] implementation for the Country domain type.
//!
//! This is the glue that lets the generic [`crate::framework::ResourceActor`]
//! keep [`Country`] records: the typed id it reads, and how a payload plus an
//! assigned id become a stored record.

use super::CountryError;
use crate::framework::ActorEntity;
use crate::model::{Country, CountryCreate, CountryId};

impl ActorEntity for Country {
    type Id = CountryId;
    type Create = CountryCreate;
    type Error = CountryError;

    fn id(&self) -> CountryId {
        Country::id(self)
    }

    /// Stores the payload's fields unchanged, except `id`, which is forced to the assigned value.
    fn from_create_params(id: CountryId, params: CountryCreate) -> Result<Self, Self::Error> {
        Ok(Country::with_id(id, params.0))
    }
}
