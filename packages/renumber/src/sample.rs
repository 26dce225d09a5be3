//! Built-in sample document for trying out the renumbering pipeline.

use std::path::Path;

use crate::error::Result;
use crate::processor::write_atomic;

/// Default file name used by `--create-sample`.
pub const SAMPLE_FILE_NAME: &str = "sample.md";

/// Sample markdown with every header level from 1 to 7, body text between
/// headers and inconsistent spacing.
pub const SAMPLE_DOCUMENT: &str = "\
# Cross-Origin Requests in a Web API

## Introduction
Cross-origin resource sharing lets a server state which other origins may call it.

### The Same-Origin Policy

Browsers block scripts from reading responses served by a different origin.
#### Same-Origin Request

Scheme, host and port all match.


Some content here.

##### Detailed Example

More detailed content here.

###### Implementation Notes
Implementation details here.

####### Per-Endpoint Policies

Policies can be attached to single endpoints instead of the whole service.

### How Does It Work?

The browser sends a preflight request before the real one.

## Enabling It Globally

Register the policy once at startup.

### Configuration

Some configuration example here.
";

/// Write [`SAMPLE_DOCUMENT`] to `path`, replacing any existing file.
pub fn write_sample(path: &Path) -> Result<()> {
    write_atomic(path, SAMPLE_DOCUMENT)?;
    tracing::info!(path = %path.display(), "Created sample document");
    Ok(())
}
