//! Storage volumes (SD cards, USB drives).

use crate::merge::fields;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub capacity: Option<u64>,
    pub free_space: Option<u64>,
    pub mounted: bool,
    pub name: Option<String>,
    pub open_files: Option<i64>,
    pub partition_size: Option<u64>,
    pub path: Option<String>,
    pub speed: Option<i64>,
}

fields!(Volume {
    "capacity" => capacity,
    "freeSpace" => free_space,
    "mounted" => mounted,
    "name" => name,
    "openFiles" => open_files,
    "partitionSize" => partition_size,
    "path" => path,
    "speed" => speed,
});

/// Virtual directories on the controller's file system.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directories {
    pub filaments: String,
    pub firmware: String,
    pub g_codes: String,
    pub macros: String,
    pub menu: String,
    pub system: String,
    pub web: String,
}

impl Default for Directories {
    fn default() -> Self {
        Self {
            filaments: "0:/filaments/".to_string(),
            firmware: "0:/firmware/".to_string(),
            g_codes: "0:/gcodes/".to_string(),
            macros: "0:/macros/".to_string(),
            menu: "0:/menu/".to_string(),
            system: "0:/sys/".to_string(),
            web: "0:/www/".to_string(),
        }
    }
}

fields!(Directories {
    "filaments" => filaments,
    "firmware" => firmware,
    "gCodes" => g_codes,
    "macros" => macros,
    "menu" => menu,
    "system" => system,
    "web" => web,
});
