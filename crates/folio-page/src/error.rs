use folio_render::ProbeError;
use thiserror::Error;

/// Why the hero could not be mounted.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("WebGL is not supported: {0}")]
    WebGlUnsupported(#[from] ProbeError),
}
