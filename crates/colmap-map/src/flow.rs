//! Flow (Sankey) diagram data for displaying a mapping result.
//!
//! Links below the confidence cutoff are dropped, the rest are ordered by
//! confidence (highest first). Source nodes come first, then target nodes,
//! each deduplicated in first-seen order.
//!
//! Labels are not shared between the two sides. A name used as both a source
//! and a target gets two nodes, one per side. A single label index over both
//! lists would merge them and turn `age -> age` into a self-loop, which Sankey
//! renderers reject.

use colmap_model::{ColumnSide, MappingResult};
use serde::Serialize;

/// Options controlling which links are drawn and how thick they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions {
    /// Minimum confidence for a link to be drawn (default: 0.6).
    pub min_confidence: f64,
    /// Factor applied to confidence to get the link weight (default: 10.0).
    pub weight_scale: f64,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
            weight_scale: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub label: String,
    pub side: ColumnSide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLink {
    /// Index into [`FlowDiagram::nodes`] of the source node.
    pub source: usize,
    /// Index into [`FlowDiagram::nodes`] of the target node.
    pub target: usize,
    pub confidence: f64,
    /// Confidence times the weight scale.
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowDiagram {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowDiagram {
    pub fn from_result(result: &MappingResult, options: &FlowOptions) -> Self {
        let mut kept: Vec<(&str, &str, f64)> = result
            .filter_min_confidence(options.min_confidence)
            .into_iter()
            .filter_map(|m| {
                m.target_column
                    .as_ref()
                    .map(|t| (m.source_column.as_str(), t.as_str(), m.confidence))
            })
            .collect();
        kept.sort_by(|a, b| b.2.total_cmp(&a.2));

        let mut source_labels: Vec<&str> = Vec::new();
        let mut target_labels: Vec<&str> = Vec::new();
        for (source, target, _) in &kept {
            if !source_labels.contains(source) {
                source_labels.push(source);
            }
            if !target_labels.contains(target) {
                target_labels.push(target);
            }
        }

        let offset = source_labels.len();
        let links = kept
            .iter()
            .map(|(source, target, confidence)| FlowLink {
                source: position(&source_labels, source),
                target: offset + position(&target_labels, target),
                confidence: *confidence,
                value: confidence * options.weight_scale,
            })
            .collect();

        let nodes = source_labels
            .iter()
            .map(|label| (label, ColumnSide::Source))
            .chain(target_labels.iter().map(|label| (label, ColumnSide::Target)))
            .map(|(label, side)| FlowNode {
                label: (*label).to_string(),
                side,
            })
            .collect();

        Self { nodes, links }
    }

    pub fn source_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|n| n.side == ColumnSide::Source)
    }

    pub fn target_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|n| n.side == ColumnSide::Target)
    }
}

fn position(labels: &[&str], label: &str) -> usize {
    labels.iter().position(|l| *l == label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use colmap_model::{ColumnName, Mapping};

    use super::*;

    fn mapping(source: &str, target: Option<&str>, confidence: f64) -> Mapping {
        Mapping {
            source_column: ColumnName::new(source).unwrap(),
            target_column: target.map(|t| ColumnName::new(t).unwrap()),
            confidence,
        }
    }

    #[test]
    fn drops_links_below_cutoff_and_unmatched() {
        let result = MappingResult::new(vec![
            mapping("gender", Some("sex"), 0.41),
            mapping("id", Some("holder_id"), 1.07),
            mapping("notes", None, 0.0),
        ]);
        let diagram = FlowDiagram::from_result(&result, &FlowOptions::default());
        assert_eq!(diagram.links.len(), 1);
        assert_eq!(diagram.nodes.len(), 2);
    }

    #[test]
    fn orders_links_by_confidence() {
        let result = MappingResult::new(vec![
            mapping("a1", Some("t1"), 0.7),
            mapping("a2", Some("t2"), 0.9),
            mapping("a3", Some("t3"), 0.7),
        ]);
        let diagram = FlowDiagram::from_result(&result, &FlowOptions::default());
        let order: Vec<usize> = diagram.links.iter().map(|l| l.source).collect();
        assert_eq!(order, vec![0, 1, 2]);
        let labels: Vec<&str> = diagram.source_nodes().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["a2", "a1", "a3"]);
    }

    #[test]
    fn deduplicates_targets_and_keeps_sides_apart() {
        let result = MappingResult::new(vec![
            mapping("age", Some("age"), 1.3),
            mapping("vehicle_age", Some("age"), 0.9),
        ]);
        let diagram = FlowDiagram::from_result(&result, &FlowOptions::default());
        assert_eq!(diagram.source_nodes().count(), 2);
        assert_eq!(diagram.target_nodes().count(), 1);
        assert_eq!(diagram.links[0].source, 0);
        assert_eq!(diagram.links[0].target, 2);
        assert_eq!(diagram.links[1].target, 2);
        assert!(diagram.links.iter().all(|l| l.source != l.target));
    }

    #[test]
    fn scales_link_weight() {
        let result = MappingResult::new(vec![mapping("id", Some("holder_id"), 1.07)]);
        let options = FlowOptions {
            min_confidence: 0.0,
            weight_scale: 5.0,
        };
        let diagram = FlowDiagram::from_result(&result, &options);
        assert!((diagram.links[0].value - 5.35).abs() < 1e-9);
        assert_eq!(diagram.links[0].confidence, 1.07);
    }
}
