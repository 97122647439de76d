use crate::error::LoadError;
use crate::profile::ProfileRecord;
use std::path::Path;
use tokio::fs;

/// Read and parse the profile document at `path`.
///
/// This is the only await on the way to a render: the result is consumed
/// once by the page session.
pub async fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileRecord, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_profile_string(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a profile document held in memory
pub fn parse_profile_string(content: &str) -> Result<ProfileRecord, serde_json::Error> {
    serde_json::from_str(content)
}
