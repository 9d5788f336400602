use crate::architecture_generation::domain::{
    HardwareComponent, Layer, SoftwareArchitecture, SoftwareModule,
};
use crate::architecture_generation::policies::{DriverBinding, DriverMapping};
use crate::architecture_generation::services::{DiagramBuilder, MermaidWriter};
use std::collections::HashSet;

/// Static description of a module that is present in every architecture.
struct ScaffoldEntry {
    id: &'static str,
    name: &'static str,
    layer: Layer,
    dependencies: &'static [&'static str],
    interfaces: &'static [&'static str],
}

impl ScaffoldEntry {
    fn to_module(&self) -> SoftwareModule {
        let mut module = SoftwareModule::new(self.id, self.name, self.layer);
        module.dependencies = self.dependencies.iter().map(|d| d.to_string()).collect();
        module.interfaces = self.interfaces.iter().map(|i| i.to_string()).collect();
        module
    }
}

/// Modules above the driver layer.
const UPPER_SCAFFOLD: [ScaffoldEntry; 3] = [
    ScaffoldEntry {
        id: "app_main",
        name: "Main Application",
        layer: Layer::Application,
        dependencies: &["svc_data", "svc_comm"],
        interfaces: &["User Interface", "API"],
    },
    ScaffoldEntry {
        id: "svc_data",
        name: "Data Processing Service",
        layer: Layer::Service,
        dependencies: &["drv_storage", "drv_sensor"],
        interfaces: &["Data API"],
    },
    ScaffoldEntry {
        id: "svc_comm",
        name: "Communication Service",
        layer: Layer::Service,
        dependencies: &["drv_network", "drv_bluetooth"],
        interfaces: &["Comm API"],
    },
];

/// Modules below the driver layer.
const LOWER_SCAFFOLD: [ScaffoldEntry; 5] = [
    ScaffoldEntry {
        id: "hal_communication",
        name: "Communication HAL",
        layer: Layer::Hal,
        dependencies: &["kernel_io"],
        interfaces: &["UART", "SPI", "I2C"],
    },
    ScaffoldEntry {
        id: "hal_memory",
        name: "Memory HAL",
        layer: Layer::Hal,
        dependencies: &["kernel_memory"],
        interfaces: &["Memory Management"],
    },
    ScaffoldEntry {
        id: "hal_io",
        name: "I/O HAL",
        layer: Layer::Hal,
        dependencies: &["kernel_io"],
        interfaces: &["GPIO", "ADC", "PWM"],
    },
    ScaffoldEntry {
        id: "kernel_io",
        name: "I/O Subsystem",
        layer: Layer::Kernel,
        dependencies: &[],
        interfaces: &["System Calls"],
    },
    ScaffoldEntry {
        id: "kernel_memory",
        name: "Memory Management",
        layer: Layer::Kernel,
        dependencies: &[],
        interfaces: &["Memory Allocation"],
    },
];

/// A `dependencies` entry that names no emitted module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDependency {
    pub module_id: String,
    pub missing: String,
}

/// ArchitectureAssembler service turning a hardware inventory into a layered
/// module graph.
///
/// Output order is application, service, driver, HAL, kernel. Scaffold
/// modules are identical for every input; one driver module is added per
/// hardware component whose category has a HAL binding.
pub struct ArchitectureAssembler;

impl ArchitectureAssembler {
    /// Number of modules emitted regardless of input.
    pub const SCAFFOLD_SIZE: usize = UPPER_SCAFFOLD.len() + LOWER_SCAFFOLD.len();

    /// Ids of the scaffold modules in emission order.
    pub fn scaffold_ids() -> Vec<&'static str> {
        UPPER_SCAFFOLD
            .iter()
            .chain(LOWER_SCAFFOLD.iter())
            .map(|e| e.id)
            .collect()
    }

    /// Builds the module list and its Mermaid diagram.
    pub fn assemble(hardware: &[HardwareComponent]) -> SoftwareArchitecture {
        let modules = Self::build_modules(hardware);

        for dangling in Self::dangling_dependencies(&modules) {
            tracing::debug!(
                module = %dangling.module_id,
                missing = %dangling.missing,
                "dependency does not resolve to an emitted module"
            );
        }

        let diagram = DiagramBuilder::build(&modules, hardware);
        let text = MermaidWriter::write(&diagram);

        SoftwareArchitecture {
            modules,
            diagram: text,
        }
    }

    /// Builds the module list only.
    pub fn build_modules(hardware: &[HardwareComponent]) -> Vec<SoftwareModule> {
        let mut modules: Vec<SoftwareModule> =
            UPPER_SCAFFOLD.iter().map(ScaffoldEntry::to_module).collect();

        modules.extend(hardware.iter().filter_map(Self::driver_for));
        modules.extend(LOWER_SCAFFOLD.iter().map(ScaffoldEntry::to_module));
        modules
    }

    /// Driver module for one hardware component, or `None` when its
    /// category is unmapped.
    pub fn driver_for(hw: &HardwareComponent) -> Option<SoftwareModule> {
        match DriverMapping::binding_for(hw.kind) {
            DriverBinding::Hal(port) => {
                let mut module = SoftwareModule::new(
                    DriverMapping::driver_id(&hw.id),
                    DriverMapping::driver_name(&hw.name),
                    Layer::Driver,
                );
                module.dependencies = vec![port.module_id().to_string()];
                module.interfaces = vec![DriverMapping::driver_interface(&hw.name)];
                module.hardware_mapping = Some(hw.id.clone());
                Some(module)
            }
            DriverBinding::Unmapped => {
                tracing::debug!(hardware = %hw.id, kind = %hw.type_name(), "no driver for hardware category");
                None
            }
        }
    }

    /// Hardware components that produced no driver module.
    pub fn unmapped_hardware(hardware: &[HardwareComponent]) -> Vec<&HardwareComponent> {
        hardware
            .iter()
            .filter(|hw| !DriverMapping::is_mapped(hw.kind))
            .collect()
    }

    /// Dependencies that point at no module in `modules`. The scaffold
    /// itself names illustrative drivers (`drv_storage`, `drv_sensor`, ...)
    /// that exist only when the hardware happens to carry those ids, so
    /// dangling entries are reported rather than rejected.
    pub fn dangling_dependencies(modules: &[SoftwareModule]) -> Vec<DanglingDependency> {
        let known: HashSet<&str> = modules.iter().map(|m| m.id.as_str()).collect();
        modules
            .iter()
            .flat_map(|m| {
                m.dependencies
                    .iter()
                    .filter(|d| !known.contains(d.as_str()))
                    .map(move |d| DanglingDependency {
                        module_id: m.id.clone(),
                        missing: d.clone(),
                    })
            })
            .collect()
    }
}
