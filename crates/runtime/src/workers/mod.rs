//! Background tasks internal to the runtime.
mod session;

pub(crate) use session::{Command, SessionWorker};
