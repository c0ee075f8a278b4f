//! Resolve external identifiers into stored records

use tracing::debug;

use crate::error::{NestEggError, NestEggResult};
use crate::models::Record;
use crate::storage::RecordStore;
use crate::validation::parse_identifier;

/// Look up a record by its external identifier.
///
/// A malformed identifier can never match a record, so it is reported as
/// `NotFound` just like an unknown one.
pub fn resolve<R, S>(store: &S, id: &str) -> NestEggResult<R>
where
    R: Record,
    S: RecordStore<R> + ?Sized,
{
    let uuid = parse_identifier(id).map_err(|err| {
        debug!(entity = R::ENTITY, error = %err, "Rejected malformed identifier");
        NestEggError::not_found(R::ENTITY, id)
    })?;

    store.find(R::Id::from(uuid))?.ok_or_else(|| {
        debug!(entity = R::ENTITY, id, "No record with this identifier");
        NestEggError::not_found(R::ENTITY, id)
    })
}
