//! Account token file loading.

use std::path::Path;

use voxelplay_types::LoaderError;

/// Non-blank, trimmed lines of `path`, in file order.
pub fn try_read_tokens(path: &Path) -> Result<Vec<String>, LoaderError> {
    let display = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| LoaderError::from_io(&display, &e))?;

    let tokens: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return Err(LoaderError::Empty { path: display });
    }
    Ok(tokens)
}

/// Like [`try_read_tokens`] but logs the error and returns no tokens.
pub fn read_tokens(path: &Path) -> Vec<String> {
    match try_read_tokens(path) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!("[Loader] {}", e);
            Vec::new()
        },
    }
}
