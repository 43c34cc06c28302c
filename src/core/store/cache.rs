//! Request layer with optional response caching.
//!
//! Responses are cached for the lifetime of the provider, which is one run.
//! Only successful responses are cached.

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;

use super::{GetParameter, Parameter, ParameterStore, RequestError};
use crate::core::constants;

/// Per-request options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Serve repeated identical requests from the cache.
    pub use_cache: bool,
}

impl RequestOptions {
    pub fn cached() -> Self {
        Self { use_cache: true }
    }
}

/// Request layer in front of a parameter store backend.
pub struct Provider<S> {
    store: S,
    cache: RefCell<HashMap<GetParameter, Parameter>>,
}

impl<S: ParameterStore> Provider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Send a `getParameter` request to the backend.
    pub fn request(
        &self,
        request: &GetParameter,
        options: RequestOptions,
    ) -> Result<Parameter, RequestError> {
        if options.use_cache {
            if let Some(hit) = self.cache.borrow().get(request) {
                trace!(name = %request.name, "request served from cache");
                return Ok(hit.clone());
            }
        }

        trace!(
            service = constants::SSM_SERVICE,
            operation = constants::GET_PARAMETER,
            name = %request.name,
            with_decryption = request.with_decryption,
            "sending request"
        );
        let response = self.store.get_parameter(request)?;

        if options.use_cache {
            self.cache
                .borrow_mut()
                .insert(request.clone(), response.clone());
        }

        Ok(response)
    }

    /// The wrapped backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}
