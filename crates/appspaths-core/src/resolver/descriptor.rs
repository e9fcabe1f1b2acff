//! Path descriptors and the ordered apps path configuration.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{BUILTIN_APPS_URL, CUSTOM_APPS_URL};

/// One apps directory: where it lives on disk, the URL prefix it is served
/// under, and whether new apps may be installed into it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PathDescriptor {
    path: String,
    url: String,
    writable: bool,
}

impl PathDescriptor {
    pub(crate) fn new(path: String, url: &str, writable: bool) -> Self {
        Self {
            path,
            url: url.to_string(),
            writable,
        }
    }

    /// Absolute filesystem path of the directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URL prefix the directory is served under.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn writable(&self) -> bool {
        self.writable
    }
}

/// Apps path configuration in load order: built-in apps, then custom apps.
///
/// Always holds exactly two descriptors. The built-in entry is read-only and
/// the custom entry is writable; neither can be changed after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    builtin: PathDescriptor,
    custom: PathDescriptor,
}

impl PathConfig {
    pub(crate) fn new(builtin_path: String, custom_path: String) -> Self {
        Self {
            builtin: PathDescriptor::new(builtin_path, BUILTIN_APPS_URL, false),
            custom: PathDescriptor::new(custom_path, CUSTOM_APPS_URL, true),
        }
    }

    /// Bundled apps shipped with the server (`/apps`).
    pub fn builtin(&self) -> &PathDescriptor {
        &self.builtin
    }

    /// User-installed apps (`/custom_apps`).
    pub fn custom(&self) -> &PathDescriptor {
        &self.custom
    }

    pub fn descriptors(&self) -> [&PathDescriptor; 2] {
        [&self.builtin, &self.custom]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathDescriptor> {
        self.descriptors().into_iter()
    }

    pub fn len(&self) -> usize {
        2
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Serializes as `{ apps_paths = [builtin, custom] }`, the key the host
/// application reads its extension directories from.
impl Serialize for PathConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("PathConfig", 1)?;
        doc.serialize_field("apps_paths", &self.descriptors()[..])?;
        doc.end()
    }
}
