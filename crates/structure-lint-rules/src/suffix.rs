//! Filename suffix matching and stripping.

/// Result of matching a basename against a category's suffix set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatch {
    /// The suffix that matched, if any.
    pub matched: Option<&'static str>,
    /// Basename with extension and matched suffix removed.
    pub base: String,
}

/// Matches `basename` against `suffixes` (longest first) and strips the
/// winner.
///
/// A suffix containing a dot is compared against the full basename
/// including extension; a dot-less suffix is compared after the extension
/// is stripped, letting one definition serve both `.ts` and `.tsx`. When
/// nothing matches, `base` is the extension-stripped basename.
#[must_use]
pub fn strip_file_suffix(basename: &str, suffixes: &[&'static str]) -> SuffixMatch {
    let mut ordered: Vec<&'static str> = suffixes.to_vec();
    ordered.sort_by_key(|s| std::cmp::Reverse(s.len()));

    for suffix in ordered {
        if suffix.contains('.') {
            if let Some(base) = basename.strip_suffix(suffix) {
                return SuffixMatch {
                    matched: Some(suffix),
                    base: base.to_owned(),
                };
            }
        } else {
            let without_ext = strip_extension(basename);
            if let Some(base) = without_ext.strip_suffix(suffix) {
                return SuffixMatch {
                    matched: Some(suffix),
                    base: base.to_owned(),
                };
            }
        }
    }

    SuffixMatch {
        matched: None,
        base: strip_extension(basename).to_owned(),
    }
}

/// Removes the final `.ext` component, if any.
#[must_use]
pub fn strip_extension(basename: &str) -> &str {
    match basename.rfind('.') {
        Some(idx) if idx > 0 => &basename[..idx],
        _ => basename,
    }
}

/// Removes a trailing extension from a suffix definition (`-broker.ts` ->
/// `-broker`), used when comparing a proxy's base against the category's
/// own suffix.
#[must_use]
pub fn suffix_without_extension(suffix: &str) -> &str {
    strip_extension(suffix)
}
