//! Path helpers on `/`-separated strings
//!
//! These work on the text of a path, never on the filesystem. Repeated
//! separators are collapsed and a trailing separator is ignored, except for
//! the root path `/` itself.

/// Collapse repeated `/` and drop a trailing one.
fn standardize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !previous_slash {
                out.push(c);
            }
            previous_slash = true;
        } else {
            out.push(c);
            previous_slash = false;
        }
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Final component: `"/tmp/scratch.tiff"` gives `"scratch.tiff"`, `"/"` gives
/// `"/"`.
pub fn last_path_component(path: &str) -> String {
    let path = standardize(path);
    if path == "/" {
        return path;
    }
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Extension of the final component, without the dot. Empty when there is
/// none or the component is a dot-file such as `.profile`.
pub fn path_extension(path: &str) -> String {
    let last = last_path_component(path);
    match last.rfind('.') {
        Some(0) | None => String::new(),
        Some(dot) => last[dot + 1..].to_string(),
    }
}

/// Everything before the final component.
///
/// `"/tmp/scratch.tiff"` gives `"/tmp"`, `"/tmp"` gives `"/"` and a bare
/// `"scratch.tiff"` gives `""`.
pub fn deleting_last_path_component(path: &str) -> String {
    let path = standardize(path);
    if path == "/" {
        return path;
    }
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(slash) => path[..slash].to_string(),
        None => String::new(),
    }
}

/// The path with the extension of its final component removed.
pub fn deleting_path_extension(path: &str) -> String {
    let path = standardize(path);
    let ext = path_extension(&path);
    if ext.is_empty() {
        return path;
    }
    path[..path.len() - ext.len() - 1].to_string()
}

/// Components of the path; a leading `/` is its own component.
pub fn path_components(path: &str) -> Vec<String> {
    let mut components = Vec::new();
    if path.starts_with('/') {
        components.push("/".to_string());
    }
    components.extend(
        path.split('/')
            .filter(|part| !part.is_empty())
            .map(str::to_string),
    );
    if path.len() > 1 && path.ends_with('/') {
        components.push("/".to_string());
    }
    components
}

/// Append `component`, inserting a separator when needed.
pub fn appending_path_component(path: &str, component: &str) -> String {
    if path.is_empty() {
        return standardize(component);
    }
    standardize(&format!("{path}/{component}"))
}

/// Append `.ext` to the path.
///
/// Returns `None` when the path is empty or ends with `/`, or when `ext`
/// contains a separator.
pub fn appending_path_extension(path: &str, ext: &str) -> Option<String> {
    if path.is_empty() || path.ends_with('/') || ext.contains('/') {
        return None;
    }
    Some(format!("{path}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_path_component() {
        assert_eq!(last_path_component("/tmp/scratch.tiff"), "scratch.tiff");
        assert_eq!(last_path_component("/tmp/scratch"), "scratch");
        assert_eq!(last_path_component("/tmp/"), "tmp");
        assert_eq!(last_path_component("scratch///"), "scratch");
        assert_eq!(last_path_component("/"), "/");
        assert_eq!(last_path_component(""), "");
    }

    #[test]
    fn test_path_extension() {
        assert_eq!(path_extension("/tmp/scratch.tiff"), "tiff");
        assert_eq!(path_extension(".scratch.tiff"), "tiff");
        assert_eq!(path_extension("/tmp/scratch"), "");
        assert_eq!(path_extension("/tmp/"), "");
        assert_eq!(path_extension("/tmp/scratch..tiff"), "tiff");
        assert_eq!(path_extension("/home/.profile"), "");
    }

    #[test]
    fn test_deleting_last_path_component() {
        assert_eq!(deleting_last_path_component("/tmp/scratch.tiff"), "/tmp");
        assert_eq!(deleting_last_path_component("/tmp/lock/"), "/tmp");
        assert_eq!(deleting_last_path_component("/tmp/"), "/");
        assert_eq!(deleting_last_path_component("/tmp"), "/");
        assert_eq!(deleting_last_path_component("/"), "/");
        assert_eq!(deleting_last_path_component("scratch.tiff"), "");
    }

    #[test]
    fn test_deleting_path_extension() {
        assert_eq!(deleting_path_extension("/tmp/scratch.tiff"), "/tmp/scratch");
        assert_eq!(deleting_path_extension("/tmp/"), "/tmp");
        assert_eq!(deleting_path_extension("scratch.bundle/"), "scratch");
        assert_eq!(deleting_path_extension("scratch..tiff"), "scratch.");
        assert_eq!(deleting_path_extension(".tiff"), ".tiff");
        assert_eq!(deleting_path_extension("/"), "/");
    }

    #[test]
    fn test_path_components() {
        assert_eq!(path_components("tmp/scratch"), vec!["tmp", "scratch"]);
        assert_eq!(path_components("/tmp/scratch"), vec!["/", "tmp", "scratch"]);
        assert_eq!(path_components("tmp//scratch/"), vec!["tmp", "scratch", "/"]);
        assert_eq!(path_components("/"), vec!["/"]);
        assert!(path_components("").is_empty());
    }

    #[test]
    fn test_appending_path_component() {
        assert_eq!(appending_path_component("/tmp", "scratch.tiff"), "/tmp/scratch.tiff");
        assert_eq!(appending_path_component("/tmp/", "scratch.tiff"), "/tmp/scratch.tiff");
        assert_eq!(appending_path_component("/", "scratch.tiff"), "/scratch.tiff");
        assert_eq!(appending_path_component("", "scratch.tiff"), "scratch.tiff");
        assert_eq!(appending_path_component("/tmp", "/nested/"), "/tmp/nested");
    }

    #[test]
    fn test_appending_path_extension() {
        assert_eq!(appending_path_extension("/tmp/scratch.old", "tiff").as_deref(), Some("/tmp/scratch.old.tiff"));
        assert_eq!(appending_path_extension("/tmp/scratch", "tiff").as_deref(), Some("/tmp/scratch.tiff"));
        assert_eq!(appending_path_extension("/tmp/", "tiff"), None);
        assert_eq!(appending_path_extension("", "tiff"), None);
        assert_eq!(appending_path_extension("/tmp/a", "b/c"), None);
    }
}
