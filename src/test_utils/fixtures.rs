//! Sample payloads shaped like vRA 7 deployment resource data.

use serde_json::{Map, Value, json};

/// Data map of a vSphere machine resource, as returned by the resource view API.
#[must_use]
pub fn machine_resource_data() -> Value {
    json!({
        "Component": "vSphere_Machine_1",
        "MachineName": "dev-0042",
        "MachineCPU": 2.0,
        "MachineMemory": 4096.0,
        "MachineStorage": 50,
        "MachineStatus": "On",
        "MachineGuestOperatingSystem": "CentOS 7 (64-bit)",
        "ip_address": "10.20.30.40",
        "IsComponentMachine": false,
        "Expire": null,
        "NETWORK_LIST": [
            {
                "componentTypeId": "",
                "componentId": null,
                "classId": "dynamicops.api.model.NetworkViewModel",
                "typeFilter": null,
                "data": {
                    "NETWORK_MAC_ADDRESS": "00:50:56:b6:78:c6",
                    "NETWORK_NAME": "dvPortGroup-wdc-sdm-vm-1521"
                }
            }
        ],
        "DISK_VOLUMES": [
            {
                "componentTypeId": "",
                "componentId": null,
                "classId": "dynamicops.api.model.DiskInputModel",
                "typeFilter": null,
                "data": {
                    "DISK_CAPACITY": 50.0,
                    "DISK_INPUT_ID": "DISK_INPUT_ID1",
                    "DISK_LABEL": "Hard disk 1"
                }
            }
        ],
        "SNAPSHOT_LIST": [],
        "Tags": { "owner": "platform", "env": "dev" }
    })
}

/// [`machine_resource_data`] as a map.
#[must_use]
pub fn machine_resource_map() -> Map<String, Value> {
    match machine_resource_data() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Two `resource_configuration` entries as written by a user.
#[must_use]
pub fn resource_configuration_entries() -> Value {
    json!([
        {
            "name": "vSphere_Machine_1",
            "configuration": {
                "cpu": 2,
                "memory": 4096,
                "Tags": { "owner": "platform" }
            }
        },
        {
            "name": "vSphere_Machine_2",
            "configuration": {
                "cpu": 4,
                "DISK_VOLUMES": [ { "data": { "DISK_CAPACITY": 100 } } ]
            }
        }
    ])
}
