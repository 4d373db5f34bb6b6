//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the battle session via RuntimeHandle:
/// - Subscribe to events (Frame, Interaction)
/// - Emit player actions
/// - Query the current frame
///
/// Frontends do NOT own the Runtime - they receive a handle for
/// communication only.
///
/// # Implementations
///
/// - [`HeadlessFrontend`](crate::HeadlessFrontend): policy-driven reference
///   consumer used by tests and the demo binary
/// - Future: terminal or graphical clients
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the session ends or the user quits.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
