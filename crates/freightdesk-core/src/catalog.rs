//! Shared vehicle catalog.
//!
//! One static list of bookable vehicle types, imported by every flow that
//! needs it (booking form, shipment screens, CLI listing). Capacity is the
//! rated payload in metric tons.

use serde::Serialize;

/// Sentinel vehicle id selecting the free-text `custom_vehicle_type` on the
/// booking draft.
pub const CUSTOM_VEHICLE_ID: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleType {
    pub id: &'static str,
    pub name: &'static str,
    pub capacity_tons: u32,
}

pub const VEHICLE_TYPES: &[VehicleType] = &[
    VehicleType {
        id: "shehzore",
        name: "Shehzore",
        capacity_tons: 2,
    },
    VehicleType {
        id: "mazda_16ft",
        name: "Mazda 16ft",
        capacity_tons: 5,
    },
    VehicleType {
        id: "mazda_20ft",
        name: "Mazda 20ft",
        capacity_tons: 8,
    },
    VehicleType {
        id: "flatbed_40ft",
        name: "Flatbed Trailer 40ft",
        capacity_tons: 25,
    },
    VehicleType {
        id: "container_20ft",
        name: "Container Truck 20ft",
        capacity_tons: 24,
    },
    VehicleType {
        id: "container_40ft",
        name: "Container Truck 40ft",
        capacity_tons: 30,
    },
    VehicleType {
        id: "lowbed",
        name: "Lowbed Trailer",
        capacity_tons: 40,
    },
    VehicleType {
        id: "dumper",
        name: "Dumper",
        capacity_tons: 20,
    },
];

/// Look up a catalog entry by id. `CUSTOM_VEHICLE_ID` has no entry.
pub fn find_vehicle(id: &str) -> Option<&'static VehicleType> {
    VEHICLE_TYPES.iter().find(|v| v.id == id)
}
