//! Plugins
//!
//! Third-party extensions keyed by id. Plugin entries arrive both through deltas and
//! through the registration calls of the plugin lifecycle manager.

use crate::merge::{fields, KeyedEntry};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    pub name: String,
    pub author: String,
    pub version: String,
    pub license: String,
    pub homepage: Option<String>,
    pub tags: Vec<String>,
    pub dwc_version: Option<String>,
    pub dwc_dependencies: Vec<String>,
    pub sbc_required: bool,
    pub sbc_dsf_version: Option<String>,
    pub sbc_executable: Option<String>,
    pub sbc_executable_arguments: Option<String>,
    pub sbc_plugin_dependencies: Vec<String>,
    pub rrf_version: Option<String>,
    /// Free-form plugin state shared with the UI.
    pub data: Value,
    /// Process id of the running plugin executable, or a negative value.
    pub pid: i64,
}

impl Default for Plugin {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            author: String::new(),
            version: String::new(),
            license: String::new(),
            homepage: None,
            tags: Vec::new(),
            dwc_version: None,
            dwc_dependencies: Vec::new(),
            sbc_required: false,
            sbc_dsf_version: None,
            sbc_executable: None,
            sbc_executable_arguments: None,
            sbc_plugin_dependencies: Vec::new(),
            rrf_version: None,
            data: Value::Object(Default::default()),
            pid: -1,
        }
    }
}

impl Plugin {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.pid > 0
    }
}

// Entries added by a delta are named after their map key unless the delta says otherwise.
impl KeyedEntry for Plugin {
    fn for_key(key: &str) -> Self {
        Self::new(key)
    }
}

fields!(Plugin {
    "id" => id,
    "name" => name,
    "author" => author,
    "version" => version,
    "license" => license,
    "homepage" => homepage,
    "tags" => tags,
    "dwcVersion" => dwc_version,
    "dwcDependencies" => dwc_dependencies,
    "sbcRequired" => sbc_required,
    "sbcDsfVersion" => sbc_dsf_version,
    "sbcExecutable" => sbc_executable,
    "sbcExecutableArguments" => sbc_executable_arguments,
    "sbcPluginDependencies" => sbc_plugin_dependencies,
    "rrfVersion" => rrf_version,
    "data" => data,
    "pid" => pid,
});
