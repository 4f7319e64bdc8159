// src/port.rs
//
// The one seam between "the page / the popup" and "the store".
// Everything that would have been a runtime message goes through `CartPort::send`.
//
// Implementations:
// - `StorageService` itself (in-process, synchronous)
// - `background::BackgroundPort` (store on its own thread, reply over a channel)
// - `NullPort` (no host: every send fails with `Unavailable`)

use thiserror::Error;

use crate::storage::{KvStore, Request, Response, StorageService, StoreError};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("messaging host is not available")]
    Unavailable,

    #[error("storage worker has gone away")]
    Disconnected,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub trait CartPort {
    fn send(&self, request: Request) -> Result<Response, PortError>;
}

impl<P: CartPort + ?Sized> CartPort for &P {
    fn send(&self, request: Request) -> Result<Response, PortError> {
        (**self).send(request)
    }
}

impl<P: CartPort + ?Sized> CartPort for Box<P> {
    fn send(&self, request: Request) -> Result<Response, PortError> {
        (**self).send(request)
    }
}

impl<S: KvStore> CartPort for StorageService<S> {
    fn send(&self, request: Request) -> Result<Response, PortError> {
        Ok(self.handle(request)?)
    }
}

/// Stand-in when there is no store to talk to.
pub struct NullPort;

impl CartPort for NullPort {
    fn send(&self, _request: Request) -> Result<Response, PortError> {
        Err(PortError::Unavailable)
    }
}
