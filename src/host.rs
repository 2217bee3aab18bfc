//! Host capability abstraction for triggering downloads.
//!
//! The download trigger never touches the DOM directly; it talks to a
//! [`DownloadHost`], which keeps the serializer free of environment
//! dependencies and lets the trigger be tested against a fake. There is one
//! implementation per target environment: `BrowserHost` (behind the `wasm`
//! feature) on the web, [`NullHost`] everywhere else.

/// Minimal capability surface a host must provide to accept a download.
///
/// The trigger calls these in a fixed order: [`is_available`] as a probe,
/// then [`create_resource`], [`activate_anchor`], and unconditionally
/// [`revoke_resource`]. Hosts are not expected to report activation failures;
/// "dispatched" is the only guarantee the trigger gives its caller.
///
/// [`is_available`]: DownloadHost::is_available
/// [`create_resource`]: DownloadHost::create_resource
/// [`activate_anchor`]: DownloadHost::activate_anchor
/// [`revoke_resource`]: DownloadHost::revoke_resource
pub trait DownloadHost {
    /// Whether a document-like surface with a root container is reachable.
    ///
    /// Returning `false` is an expected operating mode (e.g. server-side
    /// rendering), not an error.
    fn is_available(&self) -> bool;

    /// Materialize content as a transient downloadable resource and return a
    /// reference (URL) to it, or `None` if the host cannot.
    fn create_resource(&mut self, content: &str, mime_type: &str) -> Option<String>;

    /// Release a transient resource obtained from [`create_resource`].
    ///
    /// [`create_resource`]: DownloadHost::create_resource
    fn revoke_resource(&mut self, url: &str);

    /// Synthesize an anchor-like element pointing at `url` carrying the
    /// suggested `file_name`, insert it into the root container, activate it,
    /// and remove it again.
    fn activate_anchor(&mut self, url: &str, file_name: &str);
}

/// Host for environments with no download capability.
///
/// The probe always fails, so the trigger returns `false` without acquiring
/// anything. This is the default host on non-wasm targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl DownloadHost for NullHost {
    fn is_available(&self) -> bool {
        false
    }

    fn create_resource(&mut self, _content: &str, _mime_type: &str) -> Option<String> {
        None
    }

    fn revoke_resource(&mut self, _url: &str) {}

    fn activate_anchor(&mut self, _url: &str, _file_name: &str) {}
}
