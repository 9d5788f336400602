use crate::architecture_generation::domain::{
    Diagram, DiagramNode, Edge, HardwareComponent, Layer, NodeClass, NodeShape, Section,
    SoftwareModule,
};
use crate::architecture_generation::services::diagram_id;
use std::collections::{HashMap, HashSet};

/// Drivers shown per hardware-type group before collapsing the rest.
pub const MAX_DRIVERS_PER_GROUP: usize = 2;

/// Hardware parts shown per type before collapsing the rest.
pub const MAX_HARDWARE_PER_TYPE: usize = 3;

const SOFTWARE_SECTION: &str = "Software Architecture";
const HARDWARE_SECTION: &str = "Hardware Components";
/// Group key for drivers whose hardware is not in the inventory.
const UNGROUPED: &str = "other";

/// Node id of a hardware part. The `hw_` prefix keeps hardware ids out of
/// the module namespace (`app_`, `svc_`, `drv_`, `hal_`, `kernel_`).
pub fn hardware_node_id(hardware_id: &str) -> String {
    diagram_id(&format!("hw_{}", hardware_id))
}

/// Groups items by key, keeping first-seen order for both keys and items.
fn group_ordered<'a, T, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Vec<(String, Vec<&'a T>)>
where
    T: 'a,
    F: Fn(&T) -> String,
{
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// DiagramBuilder service deciding which nodes, sections and edges a
/// rendered architecture contains.
///
/// Large groups are capped; overflow collapses into one placeholder per
/// group. Edges are a fixed illustrative set, one per adjacent layer pair
/// plus one dashed driver→hardware link, not the full dependency graph.
pub struct DiagramBuilder;

impl DiagramBuilder {
    pub fn build(modules: &[SoftwareModule], hardware: &[HardwareComponent]) -> Diagram {
        let hardware_by_id: HashMap<&str, &HardwareComponent> =
            hardware.iter().map(|h| (h.id.as_str(), h)).collect();

        let mut shown: HashMap<Layer, Vec<&SoftwareModule>> = HashMap::new();
        let mut software = Section::new(SOFTWARE_SECTION).with_direction("TB");

        for layer in Layer::ORDERED {
            let members: Vec<&SoftwareModule> = modules.iter().filter(|m| m.layer == layer).collect();
            if members.is_empty() {
                continue;
            }

            let mut section = Section::new(layer.label());
            let visible = if layer == Layer::Driver {
                Self::push_driver_groups(&mut section, &members, &hardware_by_id)
            } else {
                for module in &members {
                    section.nodes.push(Self::module_node(module));
                }
                members
            };
            shown.insert(layer, visible);
            software.children.push(section);
        }

        let mut sections = vec![software];
        let mut shown_hardware: HashSet<&str> = HashSet::new();
        if !hardware.is_empty() {
            let (section, visible) = Self::hardware_section(hardware);
            shown_hardware = visible;
            sections.push(section);
        }

        let edges = Self::edges(&shown, &shown_hardware);

        Diagram { sections, edges }
    }

    fn module_node(module: &SoftwareModule) -> DiagramNode {
        DiagramNode::new(
            diagram_id(&module.id),
            module.name.clone(),
            NodeShape::Rectangle,
            NodeClass::Module(module.layer),
        )
    }

    /// Adds capped driver groups to `section`, returning the drivers shown.
    fn push_driver_groups<'a>(
        section: &mut Section,
        drivers: &[&'a SoftwareModule],
        hardware_by_id: &HashMap<&str, &HardwareComponent>,
    ) -> Vec<&'a SoftwareModule> {
        let groups = group_ordered(drivers.iter().copied(), |d| {
            d.hardware_mapping
                .as_deref()
                .and_then(|id| hardware_by_id.get(id))
                .map(|h| h.kind.to_string())
                .unwrap_or_else(|| UNGROUPED.to_string())
        });

        let mut visible = Vec::new();
        for (group, members) in groups {
            for driver in members.iter().copied().take(MAX_DRIVERS_PER_GROUP) {
                section.nodes.push(Self::module_node(driver));
                visible.push(driver);
            }
            if members.len() > MAX_DRIVERS_PER_GROUP {
                let hidden = members.len() - MAX_DRIVERS_PER_GROUP;
                section.nodes.push(DiagramNode::placeholder(
                    diagram_id(&format!("more_drv_{}", group)),
                    format!("... +{} more {} drivers", hidden, group),
                    NodeShape::Rectangle,
                    hidden,
                ));
            }
        }
        visible
    }

    fn hardware_section(hardware: &[HardwareComponent]) -> (Section, HashSet<&str>) {
        let mut section = Section::new(HARDWARE_SECTION).with_direction("TB");
        let mut visible = HashSet::new();

        for (kind, members) in group_ordered(hardware.iter(), |h| h.kind.to_string()) {
            for hw in members.iter().copied().take(MAX_HARDWARE_PER_TYPE) {
                section.nodes.push(DiagramNode::new(
                    hardware_node_id(&hw.id),
                    hw.name.clone(),
                    NodeShape::Parallelogram,
                    NodeClass::Hardware,
                ));
                visible.insert(hw.id.as_str());
            }
            if members.len() > MAX_HARDWARE_PER_TYPE {
                let hidden = members.len() - MAX_HARDWARE_PER_TYPE;
                section.nodes.push(DiagramNode::placeholder(
                    diagram_id(&format!("more_hw_{}", kind)),
                    format!("... +{} more {}", hidden, kind),
                    NodeShape::Parallelogram,
                    hidden,
                ));
            }
        }
        (section, visible)
    }

    /// Edge from the first module of `upper` to its first dependency shown in
    /// `lower`, else to the first module shown in `lower`.
    fn layer_edge(upper: &[&SoftwareModule], lower: &[&SoftwareModule]) -> Option<Edge> {
        let from = upper.first()?;
        let fallback = lower.first()?;
        let to = from
            .dependencies
            .iter()
            .find_map(|dep| lower.iter().find(|m| &m.id == dep))
            .unwrap_or(fallback);
        Some(Edge::solid(diagram_id(&from.id), diagram_id(&to.id)))
    }

    fn edges(shown: &HashMap<Layer, Vec<&SoftwareModule>>, shown_hardware: &HashSet<&str>) -> Vec<Edge> {
        let layer = |l: Layer| shown.get(&l).map(Vec::as_slice).unwrap_or(&[]);

        let pairs = [
            (Layer::Application, Layer::Service),
            (Layer::Service, Layer::Driver),
            (Layer::Driver, Layer::Hal),
            (Layer::Hal, Layer::Kernel),
        ];
        let mut edges: Vec<Edge> = pairs
            .iter()
            .filter_map(|(upper, lower)| Self::layer_edge(layer(*upper), layer(*lower)))
            .collect();

        let hardware_link = layer(Layer::Driver).iter().find_map(|d| {
            d.hardware_mapping
                .as_deref()
                .filter(|hw| shown_hardware.contains(hw))
                .map(|hw| Edge::dashed(diagram_id(&d.id), hardware_node_id(hw)))
        });
        edges.extend(hardware_link);
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture_generation::domain::{EdgeStyle, HardwareType};
    use crate::architecture_generation::services::ArchitectureAssembler;

    fn build(hardware: &[HardwareComponent]) -> Diagram {
        let modules = ArchitectureAssembler::build_modules(hardware);
        DiagramBuilder::build(&modules, hardware)
    }

    fn many(kind: HardwareType, prefix: &str, n: usize) -> Vec<HardwareComponent> {
        (1..=n)
            .map(|i| HardwareComponent::new(format!("{}{}", prefix, i), format!("{} {}", prefix, i), kind))
            .collect()
    }

    fn section_ids(diagram: &Diagram, label: &str) -> Vec<String> {
        diagram
            .section(label)
            .map(|s| s.nodes.iter().map(|n| n.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_scaffold_only_layout() {
        let diagram = build(&[]);
        assert_eq!(diagram.sections.len(), 1);
        let labels: Vec<&str> = diagram.sections[0]
            .children
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Application Layer", "Service Layer", "HAL Layer", "OS/Kernel"]
        );
        assert!(diagram.section(HARDWARE_SECTION).is_none());
    }

    #[test]
    fn test_layer_sections_follow_fixed_order() {
        let diagram = build(&many(HardwareType::Sensor, "s", 1));
        let labels: Vec<&str> = diagram.sections[0]
            .children
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Application Layer",
                "Service Layer",
                "Driver Layer",
                "HAL Layer",
                "OS/Kernel"
            ]
        );
    }

    #[test]
    fn test_five_communication_parts_collapse_to_two_plus_placeholder() {
        let hardware = many(HardwareType::Communication, "uart", 5);
        let diagram = build(&hardware);

        let drivers = diagram.section("Driver Layer").unwrap();
        let individual: Vec<&DiagramNode> = drivers.nodes.iter().filter(|n| !n.is_placeholder()).collect();
        assert_eq!(individual.len(), 2);
        assert_eq!(individual[0].id, "drv_uart1");
        assert_eq!(individual[1].id, "drv_uart2");

        let placeholders: Vec<&DiagramNode> = drivers.nodes.iter().filter(|n| n.is_placeholder()).collect();
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].id, "more_drv_communication");
        assert_eq!(placeholders[0].hidden_count, Some(3));
        assert_eq!(placeholders[0].label, "... +3 more communication drivers");
        assert_eq!(placeholders[0].class, NodeClass::Collapsed);
    }

    #[test]
    fn test_hardware_groups_capped_at_three() {
        let hardware = many(HardwareType::Communication, "uart", 5);
        let diagram = build(&hardware);
        let ids = section_ids(&diagram, HARDWARE_SECTION);
        assert_eq!(ids, vec!["hw_uart1", "hw_uart2", "hw_uart3", "more_hw_communication"]);
        assert_eq!(
            diagram.node("more_hw_communication").unwrap().label,
            "... +2 more communication"
        );
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let mut hardware = many(HardwareType::Sensor, "imu", 1);
        hardware.extend(many(HardwareType::Storage, "sd", 3));
        hardware.extend(many(HardwareType::Sensor, "temp", 2));
        let diagram = build(&hardware);

        assert_eq!(
            section_ids(&diagram, "Driver Layer"),
            vec!["drv_imu1", "drv_temp1", "more_drv_sensor", "drv_sd1", "drv_sd2", "more_drv_storage"]
        );
        assert_eq!(
            section_ids(&diagram, HARDWARE_SECTION),
            vec!["hw_imu1", "hw_temp1", "hw_temp2", "hw_sd1", "hw_sd2", "hw_sd3"]
        );
    }

    #[test]
    fn test_unmapped_hardware_still_drawn() {
        let hardware = vec![HardwareComponent::new("cpu", "Cortex-A53", HardwareType::Processor)];
        let diagram = build(&hardware);
        assert!(diagram.section("Driver Layer").is_none());
        assert_eq!(section_ids(&diagram, HARDWARE_SECTION), vec!["hw_cpu"]);
        assert!(diagram.edges.iter().all(|e| e.style == EdgeStyle::Solid));
    }

    #[test]
    fn test_illustrative_edges() {
        let hardware = vec![HardwareComponent::new("hw1", "Accelerometer", HardwareType::Sensor)];
        let diagram = build(&hardware);
        let pairs: Vec<(&str, &str, EdgeStyle)> = diagram
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str(), e.style))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("app_main", "svc_data", EdgeStyle::Solid),
                ("svc_data", "drv_hw1", EdgeStyle::Solid),
                ("drv_hw1", "hal_io", EdgeStyle::Solid),
                ("hal_communication", "kernel_io", EdgeStyle::Solid),
                ("drv_hw1", "hw_hw1", EdgeStyle::Dashed),
            ]
        );
    }

    #[test]
    fn test_no_driver_edges_without_drivers() {
        let diagram = build(&[]);
        assert_eq!(diagram.edges.len(), 2);
        assert!(diagram.edges.iter().all(|e| !e.to.starts_with("drv_")));
    }

    #[test]
    fn test_placeholders_never_in_edges() {
        let mut hardware = many(HardwareType::Communication, "can", 6);
        hardware.extend(many(HardwareType::Memory, "ram", 4));
        let diagram = build(&hardware);
        let placeholder_ids: HashSet<String> =
            diagram.placeholders().iter().map(|n| n.id.clone()).collect();
        assert_eq!(placeholder_ids.len(), 4);
        for edge in &diagram.edges {
            assert!(!placeholder_ids.contains(&edge.from));
            assert!(!placeholder_ids.contains(&edge.to));
        }
    }

    #[test]
    fn test_node_ids_are_sanitized() {
        let hardware = vec![HardwareComponent::new("temp-sensor 1", "Temp", HardwareType::Sensor)];
        let diagram = build(&hardware);
        assert!(diagram.node("drv_temp_sensor_1").is_some());
        assert!(diagram.node("hw_temp_sensor_1").is_some());
    }

    #[test]
    fn test_hardware_named_like_a_module_gets_its_own_node() {
        let hardware = vec![HardwareComponent::new("kernel_io", "IO Expander", HardwareType::Interface)];
        let diagram = build(&hardware);

        let kernel = diagram.node("kernel_io").unwrap();
        assert_eq!(kernel.class, NodeClass::Module(Layer::Kernel));
        let part = diagram.node("hw_kernel_io").unwrap();
        assert_eq!(part.class, NodeClass::Hardware);

        let nodes = diagram.nodes();
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_keyword_hardware_id_is_prefixed() {
        let hardware = vec![HardwareComponent::new("end", "Endpoint", HardwareType::Communication)];
        let diagram = build(&hardware);
        assert!(diagram.node("hw_end").is_some());
        assert!(diagram.node("drv_end").is_some());
        assert!(diagram.node("end").is_none());
    }
}
