//! Expander: turns a parsed [`Document`] into the concrete paths it denotes
//!
//! Every node contributes an alternative set (one name for plain nodes, the
//! bracketed list for repeat nodes). The result is the Cartesian product of
//! those sets in node order, enumerated with the last node varying fastest.
//!
//! The product grows multiplicatively with each repeat block, so callers may
//! cap it with [`ExpandOptions::max_paths`]; the cap is checked before any
//! path is built.

mod odometer;
mod path;

pub use odometer::Expansion;
pub use path::{Path, PathSet, Segment};

use rayon::prelude::*;
use thiserror::Error;

use crate::parser::{Document, ErrorCode};

/// Errors raised while expanding a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The product exceeds the configured `max_paths`.
    #[error("document expands to {count} paths, more than the limit of {limit}")]
    TooManyPaths { count: usize, limit: usize },

    /// The product does not fit in `usize`.
    #[error("document expands to more paths than can be counted")]
    ProductOverflow,
}

impl ExpandError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TooManyPaths { .. } => ErrorCode::E0301,
            Self::ProductOverflow => ErrorCode::E0302,
        }
    }
}

/// Limits applied by [`expand_with`] and [`expand_parallel`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Reject documents that expand to more than this many paths
    pub max_paths: Option<usize>,
}

impl ExpandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }
}

/// Lazily enumerate every path, checking `options` first
pub fn expand_lazy<'d>(
    document: &'d Document,
    options: &ExpandOptions,
) -> Result<Expansion<'d>, ExpandError> {
    let expansion = Expansion::new(document)?;
    let count = expansion.total();
    tracing::debug!(nodes = document.len(), paths = count, "expanding document");

    match options.max_paths {
        Some(limit) if count > limit => {
            tracing::warn!(paths = count, limit, "expansion exceeds path limit");
            Err(ExpandError::TooManyPaths { count, limit })
        }
        _ => Ok(expansion),
    }
}

/// Expand a document into its full [`PathSet`]
pub fn expand(document: &Document) -> Result<PathSet, ExpandError> {
    expand_with(document, &ExpandOptions::default())
}

/// Expand with a path limit
pub fn expand_with(document: &Document, options: &ExpandOptions) -> Result<PathSet, ExpandError> {
    Ok(expand_lazy(document, options)?.collect())
}

/// Expand on the rayon pool
///
/// Each worker decodes paths from their odometer index, so the result is
/// identical to [`expand_with`].
pub fn expand_parallel(
    document: &Document,
    options: &ExpandOptions,
) -> Result<PathSet, ExpandError> {
    let expansion = expand_lazy(document, options)?;
    let paths: Vec<Path> = (0..expansion.total())
        .into_par_iter()
        .map(|index| expansion.path_at(index))
        .collect();
    Ok(PathSet::new(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    #[test]
    fn test_expand_without_repeats_yields_one_path() {
        let doc = parse_str(".usr.{directory}local.{file}bin").unwrap();
        let paths = expand(&doc).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].segments(),
            &[
                Segment::plain("usr"),
                Segment::tagged("local", "directory"),
                Segment::tagged("bin", "file"),
            ]
        );
    }

    #[test]
    fn test_limit_rejects_large_product() {
        let doc = parse_str(".[a|b|c].[d|e]").unwrap();
        let err = expand_with(&doc, &ExpandOptions::new().with_max_paths(5)).unwrap_err();
        assert_eq!(err, ExpandError::TooManyPaths { count: 6, limit: 5 });
        assert_eq!(err.code(), ErrorCode::E0301);

        let ok = expand_with(&doc, &ExpandOptions::new().with_max_paths(6)).unwrap();
        assert_eq!(ok.len(), 6);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let doc = parse_str(".[a|b|c].x.[d|e|f|g].{file}[h|i]").unwrap();
        let options = ExpandOptions::default();
        assert_eq!(
            expand_parallel(&doc, &options).unwrap(),
            expand_with(&doc, &options).unwrap()
        );
    }
}
