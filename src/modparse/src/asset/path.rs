//! Unreal path helpers
//!
//! Object paths look like `/MyMod/Items/PrimalItem_Foo.PrimalItem_Foo_C`:
//! a package path, a `.`, and the object name. Blueprint generated classes
//! carry a `_C` suffix on the object name.

const CLASS_SUFFIX: &str = "_C";

/// Object name after the final `.`, or the last path segment for package paths
pub fn object_name(path: &str) -> &str {
    match path.rsplit_once('.') {
        Some((_, name)) => name,
        None => base_filename(path),
    }
}

/// Package path without the object name
pub fn package_path(path: &str) -> &str {
    match path.rsplit_once('.') {
        Some((package, _)) => package,
        None => path,
    }
}

/// Last segment of the package path, e.g. `ModDataAsset_MyMod`
pub fn base_filename(path: &str) -> &str {
    let package = package_path(path);
    package.rsplit('/').next().unwrap_or(package)
}

/// Strip the generated class suffix: `/A/B.B_C` -> `/A/B.B`
pub fn strip_class_suffix(path: &str) -> &str {
    path.strip_suffix(CLASS_SUFFIX).unwrap_or(path)
}

/// Expand a package path to its primary object path: `/A/B` -> `/A/B.B`
pub fn primary_object_path(package: &str) -> String {
    format!("{}.{}", package, base_filename(package))
}

/// Normalise a folder to end in exactly one `/` so prefix checks stay on segment boundaries
pub fn folder_prefix(folder: &str) -> String {
    format!("{}/", folder.trim_end_matches('/'))
}

/// True if `path` lives under `folder` (segment-aware)
pub fn is_under(path: &str, folder: &str) -> bool {
    path.starts_with(&folder_prefix(folder))
}
