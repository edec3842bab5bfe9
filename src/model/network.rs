//! Network interfaces of the controller.

use crate::merge::{fields, EntityList};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub active_protocols: Vec<String>,
    #[serde(rename = "actualIP")]
    pub actual_ip: Option<String>,
    pub dns_server: Option<String>,
    pub firmware_version: Option<String>,
    pub gateway: Option<String>,
    pub mac: Option<String>,
    pub num_reconnects: Option<i64>,
    pub signal: Option<i64>,
    pub speed: Option<i64>,
    pub ssid: Option<String>,
    pub state: Option<String>,
    pub subnet: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

fields!(NetworkInterface {
    "activeProtocols" => active_protocols,
    "actualIP" => actual_ip,
    "dnsServer" => dns_server,
    "firmwareVersion" => firmware_version,
    "gateway" => gateway,
    "mac" => mac,
    "numReconnects" => num_reconnects,
    "signal" => signal,
    "speed" => speed,
    "ssid" => ssid,
    "state" => state,
    "subnet" => subnet,
    "type" => kind,
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub cors_site: Option<String>,
    pub hostname: String,
    pub interfaces: EntityList<NetworkInterface>,
    pub name: String,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            cors_site: None,
            hostname: "duet".to_string(),
            interfaces: EntityList::new(),
            name: "My Duet".to_string(),
        }
    }
}

fields!(Network {
    "corsSite" => cors_site,
    "hostname" => hostname,
    "interfaces" => interfaces,
    "name" => name,
});
