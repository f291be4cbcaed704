use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table, Value};

/// The caller's `Cargo.toml`, used to find how generated code should name
/// a workspace crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_alias"));
/// ```
///
/// Reading the manifest is not cheap: resolve once per macro invocation and
/// reuse the returned path.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::key`,
///    where `key` is the dependency key. A renamed dependency
///    (`foo = { package = "vc_alias" }`) resolves to `::foo`.
/// 2. If the requested name begins with `vc_` and the caller depends on the
///    facade crate `vc_except`, return `::vc_except::short_name`
///    (e.g. `vc_alias` -> `::vc_except::alias`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate that derives its own traits should declare
/// `extern crate self as crate_name;` so the fallback path also resolves
/// from inside the crate.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_except";
const WORKSPACE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(text: Box<str>) -> Result<Document<Box<str>>, toml_edit::TomlError> {
        Document::parse(text)
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path)
            .unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    /// Returns the key under which the package `name` is listed.
    fn dependency_key<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        deps.iter().find_map(|(key, item)| {
            let package = match item {
                Item::Table(table) => table.get("package").and_then(Item::as_str),
                Item::Value(Value::InlineTable(table)) => {
                    table.get("package").and_then(Value::as_str)
                }
                _ => None,
            };
            (package.unwrap_or(key) == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::parse_path(&format!("::{key}")));
        }

        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        let facade = Self::dependency_key(deps, FACADE_NAME)?;
        Some(Self::parse_path(&format!("::{facade}::{module}")))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// this manifest. See the type level documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(section)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(text.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest(
            r#"
            [dependencies]
            vc_alias = { path = "../vc_alias" }
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("vc_alias")), "::vc_alias");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest(
            r#"
            [dependencies]
            alias = { package = "vc_alias", version = "0.0.1" }

            [dependencies.except]
            package = "vc_except"
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("vc_alias")), "::alias");
        assert_eq!(path_string(&m.get_crate_path("vc_enforce")), "::except::enforce");
    }

    #[test]
    fn through_facade() {
        let m = manifest(
            r#"
            [dependencies]
            log = "0.4"

            [dev-dependencies]
            vc_except = "0.0.1"
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("vc_alias")), "::vc_except::alias");
        assert_eq!(path_string(&m.get_crate_path("serde")), "::serde");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_alias")), "::vc_alias");
    }
}
