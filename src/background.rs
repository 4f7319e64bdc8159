// src/background.rs
//
// Runs a StorageService on a dedicated thread and hands out a port to it.
// Requests are processed one at a time in arrival order; each caller blocks
// on its own reply channel. Dropping the last port ends the thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::port::{CartPort, PortError};
use crate::storage::{KvStore, Request, Response, StorageService, StoreError};

type Reply = Sender<Result<Response, StoreError>>;

struct Envelope {
    request: Request,
    reply: Reply,
}

#[derive(Clone)]
pub struct BackgroundPort {
    tx: Sender<Envelope>,
}

impl CartPort for BackgroundPort {
    fn send(&self, request: Request) -> Result<Response, PortError> {
        let (reply, rx) = mpsc::channel();
        self.tx
            .send(Envelope { request, reply })
            .map_err(|_| PortError::Disconnected)?;
        match rx.recv() {
            Ok(res) => Ok(res?),
            Err(_) => Err(PortError::Disconnected),
        }
    }
}

/// Start the worker. Keep the handle if you want to join on shutdown.
pub fn spawn<S>(service: StorageService<S>) -> std::io::Result<(BackgroundPort, JoinHandle<()>)>
where
    S: KvStore + 'static,
{
    let (tx, rx) = mpsc::channel::<Envelope>();
    let handle = thread::Builder::new()
        .name(s!("cart-storage"))
        .spawn(move || serve(service, rx))?;
    logd!("Store: Background worker started");
    Ok((BackgroundPort { tx }, handle))
}

fn serve<S: KvStore>(service: StorageService<S>, rx: Receiver<Envelope>) {
    for Envelope { request, reply } in rx {
        let kind = request.kind();
        let res = service.handle(request);
        if let Err(e) = &res {
            loge!("Store: {} failed: {}", kind, e);
        }
        // Caller may have given up; nothing to do about it.
        let _ = reply.send(res);
    }
    logd!("Store: Background worker stopped");
}
