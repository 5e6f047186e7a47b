// Adapters layer: HTTP clients implementing the domain ports against the
// case data store, identity service, formatter service and draft store.

pub mod case_data;
pub mod draft_store;
pub mod formatter;
pub mod http;
pub mod identity;

pub use case_data::CaseDataClient;
pub use draft_store::DraftStoreClient;
pub use formatter::FormatterClient;
pub use identity::IdentityClient;
