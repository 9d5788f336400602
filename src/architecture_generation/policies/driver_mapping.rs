use crate::architecture_generation::domain::HardwareType;

/// One of the fixed HAL modules a driver can sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalPort {
    Communication,
    Memory,
    Io,
}

impl HalPort {
    /// Id of the scaffold HAL module behind this port.
    pub fn module_id(&self) -> &'static str {
        match self {
            HalPort::Communication => "hal_communication",
            HalPort::Memory => "hal_memory",
            HalPort::Io => "hal_io",
        }
    }
}

/// Result of mapping a hardware category onto the driver layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverBinding {
    /// A driver module is generated on top of this HAL port.
    Hal(HalPort),
    /// No driver module is generated for this category.
    Unmapped,
}

/// DriverMapping policy deciding which hardware categories get a driver.
///
/// Mapping:
/// 1. communication → communication HAL
/// 2. storage, memory → memory HAL
/// 3. sensor, interface → I/O HAL
/// 4. processor, actuator, power, display, unknown → unmapped
///
/// Unmapped categories are reported, never rejected.
pub struct DriverMapping;

impl DriverMapping {
    pub fn binding_for(kind: HardwareType) -> DriverBinding {
        match kind {
            HardwareType::Communication => DriverBinding::Hal(HalPort::Communication),
            HardwareType::Storage | HardwareType::Memory => DriverBinding::Hal(HalPort::Memory),
            HardwareType::Sensor | HardwareType::Interface => DriverBinding::Hal(HalPort::Io),
            HardwareType::Processor
            | HardwareType::Actuator
            | HardwareType::Power
            | HardwareType::Display
            | HardwareType::Unknown => DriverBinding::Unmapped,
        }
    }

    pub fn is_mapped(kind: HardwareType) -> bool {
        matches!(Self::binding_for(kind), DriverBinding::Hal(_))
    }

    /// Driver module id for a hardware id.
    pub fn driver_id(hardware_id: &str) -> String {
        format!("drv_{}", hardware_id)
    }

    pub fn driver_name(hardware_name: &str) -> String {
        format!("{} Driver", hardware_name)
    }

    pub fn driver_interface(hardware_name: &str) -> String {
        format!("{} Interface", hardware_name)
    }
}
