//! Host environment contract for the PhishGuard gate.
//!
//! The gate core never touches a real DOM or window object; everything it
//! needs from its embedding environment comes through the [`HostBridge`]
//! trait: the current page identity (url, hostname, top-frame flag) and an
//! overlay mount point. The bridge accessors are assumed reliable and
//! synchronous; overlay operations are async because real hosts schedule DOM
//! work on their own loop.
//!
//! [`InMemoryBridge`] is the in-process implementation used by tests and
//! headless embeddings.

pub mod overlay;

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub use overlay::{OverlayNode, OverlaySeverity};

/// Handle to a mounted overlay, returned by the bridge and required for
/// every later update or unmount.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OverlayHandle(pub Uuid);

impl OverlayHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OverlayHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by a host bridge.
#[derive(Clone, Debug, Error)]
pub enum BridgeError {
    #[error("no overlay mounted for handle")]
    NoSuchOverlay,
    #[error("overlay already mounted")]
    AlreadyMounted,
    #[error("internal error: {0}")]
    Internal(String),
}

/// Contract the gate consumes from its embedding environment.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Absolute URL of the current page.
    fn current_url(&self) -> String;

    /// Hostname of the current page.
    fn hostname(&self) -> String;

    /// Whether the gate is running in the outermost browsing context.
    fn is_top_level_frame(&self) -> bool;

    /// Insert an overlay above the page content.
    async fn mount_overlay(&self, node: OverlayNode) -> Result<OverlayHandle, BridgeError>;

    /// Mutate a mounted overlay in place.
    async fn update_overlay(&self, handle: &OverlayHandle, node: OverlayNode)
        -> Result<(), BridgeError>;

    /// Remove a mounted overlay, releasing the page underneath.
    async fn unmount_overlay(&self, handle: OverlayHandle) -> Result<(), BridgeError>;
}

/// In-process bridge holding at most one overlay, with enough introspection
/// for tests to assert what the user would see.
pub struct InMemoryBridge {
    url: String,
    hostname: String,
    top_frame: bool,
    slot: Mutex<OverlaySlot>,
}

#[derive(Default)]
struct OverlaySlot {
    mounted: Option<(OverlayHandle, OverlayNode)>,
    mounts: u32,
    unmounts: u32,
}

impl InMemoryBridge {
    pub fn new(url: impl Into<String>, hostname: impl Into<String>, top_frame: bool) -> Self {
        Self {
            url: url.into(),
            hostname: hostname.into(),
            top_frame,
            slot: Mutex::new(OverlaySlot::default()),
        }
    }

    /// Bridge for a top-level frame.
    pub fn top_frame(url: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::new(url, hostname, true)
    }

    /// Bridge for a nested frame.
    pub fn embedded_frame(url: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::new(url, hostname, false)
    }

    /// Currently mounted overlay content, if any.
    pub fn mounted_overlay(&self) -> Option<OverlayNode> {
        self.slot
            .lock()
            .ok()
            .and_then(|slot| slot.mounted.as_ref().map(|(_, node)| node.clone()))
    }

    /// Number of mounts observed over the bridge lifetime.
    pub fn mount_count(&self) -> u32 {
        self.slot.lock().map(|slot| slot.mounts).unwrap_or(0)
    }

    /// Number of unmounts observed over the bridge lifetime.
    pub fn unmount_count(&self) -> u32 {
        self.slot.lock().map(|slot| slot.unmounts).unwrap_or(0)
    }
}

#[async_trait]
impl HostBridge for InMemoryBridge {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn is_top_level_frame(&self) -> bool {
        self.top_frame
    }

    async fn mount_overlay(&self, node: OverlayNode) -> Result<OverlayHandle, BridgeError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| BridgeError::Internal(err.to_string()))?;
        if slot.mounted.is_some() {
            return Err(BridgeError::AlreadyMounted);
        }
        let handle = OverlayHandle::new();
        debug!(severity = node.severity.name(), "overlay mounted");
        slot.mounted = Some((handle.clone(), node));
        slot.mounts += 1;
        Ok(handle)
    }

    async fn update_overlay(
        &self,
        handle: &OverlayHandle,
        node: OverlayNode,
    ) -> Result<(), BridgeError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| BridgeError::Internal(err.to_string()))?;
        match &mut slot.mounted {
            Some((mounted, content)) if mounted == handle => {
                debug!(severity = node.severity.name(), "overlay updated");
                *content = node;
                Ok(())
            }
            _ => Err(BridgeError::NoSuchOverlay),
        }
    }

    async fn unmount_overlay(&self, handle: OverlayHandle) -> Result<(), BridgeError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| BridgeError::Internal(err.to_string()))?;
        match &slot.mounted {
            Some((mounted, _)) if *mounted == handle => {
                slot.mounted = None;
                slot.unmounts += 1;
                debug!("overlay unmounted");
                Ok(())
            }
            _ => Err(BridgeError::NoSuchOverlay),
        }
    }
}
