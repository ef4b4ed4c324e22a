//! Path classification: decides whether and how a file participates in
//! structure validation.

/// Location facts extracted from a file path.
///
/// `segments` are the folder names between the source root and the
/// basename, inclusive of the category folder; `depth` counts the folders
/// strictly beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// First folder after the source root. May be unknown or forbidden;
    /// Level 1 decides.
    pub category_name: String,
    /// Folder names from the category folder down to the file's parent.
    pub segments: Vec<String>,
    /// `segments.len() - 1`.
    pub depth: usize,
    /// File name with extension.
    pub basename: String,
    /// Basename contains the `-layer-` decomposition-helper infix.
    pub is_layer_file: bool,
    /// Basename ends with `.proxy.ts` / `.proxy.tsx`.
    pub is_proxy_file: bool,
}

/// Marker folder separating a project's source root from its content.
pub const SOURCE_MARKER: &str = "src";

/// Classifies a path, or returns `None` when the file is intentionally
/// outside the pipeline's scope.
///
/// Skips: paths without a `src/` component, files directly in the source
/// root, and basenames with more than one dot (`*.test.ts`, `*.stub.ts`),
/// except proxy companions which are classified normally.
#[must_use]
pub fn classify(path: &str) -> Option<Classification> {
    classify_with_marker(path, SOURCE_MARKER)
}

/// [`classify`] with a custom source-root marker folder.
#[must_use]
pub fn classify_with_marker(path: &str, marker: &str) -> Option<Classification> {
    let after_root = strip_to_source_root(path, marker)?;

    let parts: Vec<&str> = after_root.split('/').filter(|p| !p.is_empty()).collect();
    // A lone basename sits directly in the source root.
    if parts.len() < 2 {
        return None;
    }

    let basename = (*parts.last()?).to_owned();
    let is_proxy_file = basename.ends_with(".proxy.ts") || basename.ends_with(".proxy.tsx");

    // Multi-dot basenames are companions (tests, stubs) the pipeline does
    // not classify; proxy files are the one carve-out.
    if basename.matches('.').count() > 1 && !is_proxy_file {
        return None;
    }

    let segments: Vec<String> = parts[..parts.len() - 1]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let is_layer_file = basename.contains("-layer-");

    Some(Classification {
        category_name: segments[0].clone(),
        depth: segments.len() - 1,
        segments,
        basename,
        is_layer_file,
        is_proxy_file,
    })
}

/// Returns the path remainder after the first `/{marker}/` component.
fn strip_to_source_root<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    let needle = format!("/{marker}/");
    if let Some(idx) = path.find(&needle) {
        return Some(&path[idx + needle.len()..]);
    }
    // Relative paths may start at the root itself.
    let prefix = format!("{marker}/");
    path.strip_prefix(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_broker_path() {
        let c = classify("/project/src/brokers/user/fetch/user-fetch-broker.ts").unwrap();
        assert_eq!(c.category_name, "brokers");
        assert_eq!(c.segments, vec!["brokers", "user", "fetch"]);
        assert_eq!(c.depth, 2);
        assert_eq!(c.basename, "user-fetch-broker.ts");
        assert!(!c.is_layer_file);
        assert!(!c.is_proxy_file);
    }

    #[test]
    fn classifies_relative_path() {
        let c = classify("src/guards/has-permission/has-permission-guard.ts").unwrap();
        assert_eq!(c.category_name, "guards");
        assert_eq!(c.depth, 1);
    }

    #[test]
    fn skips_path_without_source_root() {
        assert!(classify("/project/lib/utils/anything.ts").is_none());
    }

    #[test]
    fn skips_file_directly_in_source_root() {
        assert!(classify("/project/src/index.ts").is_none());
    }

    #[test]
    fn skips_test_and_stub_companions() {
        assert!(classify("/project/src/brokers/user/fetch/user-fetch-broker.test.ts").is_none());
        assert!(classify("/project/src/contracts/user/user-contract.stub.ts").is_none());
    }

    #[test]
    fn proxy_files_are_not_dot_skipped() {
        let c = classify("/project/src/adapters/http/http-get-adapter.proxy.ts").unwrap();
        assert!(c.is_proxy_file);
        assert_eq!(c.basename, "http-get-adapter.proxy.ts");

        let tsx = classify("/project/src/widgets/chat/chat-widget.proxy.tsx").unwrap();
        assert!(tsx.is_proxy_file);
    }

    #[test]
    fn detects_layer_files() {
        let c =
            classify("/project/src/brokers/rule/enforce/validate-depth-layer-broker.ts").unwrap();
        assert!(c.is_layer_file);
    }

    #[test]
    fn uses_first_source_marker_occurrence() {
        let c = classify("/project/src/brokers/src/fetch/user-fetch-broker.ts").unwrap();
        assert_eq!(c.category_name, "brokers");
        assert_eq!(c.segments, vec!["brokers", "src", "fetch"]);
    }
}
