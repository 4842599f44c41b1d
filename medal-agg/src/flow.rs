//! Discipline → medal-kind flow graph for the Sankey view.

use medal_data::{MedalKind, MedalRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Disciplines outside the top-N by count collapse into this bucket, so the
/// discipline side never exceeds N + 1 nodes.
pub const OTHER_BUCKET: &str = "Other";

/// Default discipline cap for a readable Sankey.
pub const DEFAULT_TOP_DISCIPLINES: usize = 12;

/// Which side of the flow a node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowSide {
    Left,
    Right,
}

/// A flow node: a discipline (left) or a medal kind (right).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub name: String,
    pub side: FlowSide,
}

/// A weighted edge between node indices, shaped for d3-sankey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

/// Count records grouped by (discipline, medal kind) with the discipline
/// side capped at `top_n` + "Other".
///
/// Discipline nodes are ordered by descending collapsed count (stable on
/// ties); medal-kind nodes keep the fixed Gold, Silver, Bronze order and
/// only kinds that occur appear. Returns `None` for an empty record set so
/// the caller can clear the surface instead of drawing an empty shell.
pub fn build_flow(records: &[MedalRecord], top_n: usize) -> Option<FlowGraph> {
    if records.is_empty() {
        return None;
    }

    // Per-discipline totals in first-seen order, then ranked.
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for r in records {
        if !counts.contains_key(r.discipline.as_str()) {
            order.push(r.discipline.clone());
        }
        *counts.entry(r.discipline.as_str()).or_insert(0) += 1;
    }
    order.sort_by(|a, b| counts[b.as_str()].cmp(&counts[a.as_str()]));
    let top: Vec<String> = order.into_iter().take(top_n).collect();

    fn collapse<'a>(top: &[String], discipline: &'a str) -> &'a str {
        if top.iter().any(|t| t == discipline) {
            discipline
        } else {
            OTHER_BUCKET
        }
    }

    // Collapsed (discipline, kind) counts and collapsed discipline totals.
    let mut link_counts: HashMap<(&str, MedalKind), u32> = HashMap::new();
    let mut discipline_totals: HashMap<&str, u32> = HashMap::new();
    for r in records {
        let name = collapse(&top, &r.discipline);
        *link_counts.entry((name, r.kind)).or_insert(0) += 1;
        *discipline_totals.entry(name).or_insert(0) += 1;
    }

    let mut disciplines: Vec<&str> = discipline_totals.keys().copied().collect();
    disciplines.sort_by(|a, b| {
        discipline_totals[b]
            .cmp(&discipline_totals[a])
            .then_with(|| a.cmp(b))
    });

    let kinds: Vec<MedalKind> = MedalKind::ALL
        .into_iter()
        .filter(|k| records.iter().any(|r| r.kind == *k))
        .collect();

    let mut nodes: Vec<FlowNode> = disciplines
        .iter()
        .map(|d| FlowNode {
            name: d.to_string(),
            side: FlowSide::Left,
        })
        .collect();
    nodes.extend(kinds.iter().map(|k| FlowNode {
        name: k.label().to_string(),
        side: FlowSide::Right,
    }));

    let mut links = Vec::new();
    for (i, discipline) in disciplines.iter().enumerate() {
        for (j, kind) in kinds.iter().enumerate() {
            if let Some(&value) = link_counts.get(&(*discipline, *kind)) {
                links.push(FlowLink {
                    source: i,
                    target: disciplines.len() + j,
                    value,
                });
            }
        }
    }

    Some(FlowGraph { nodes, links })
}

#[cfg(test)]
mod tests {
    use super::{build_flow, FlowSide, DEFAULT_TOP_DISCIPLINES, OTHER_BUCKET};
    use medal_data::{MedalKind, MedalRecord};

    fn record(discipline: &str, kind: MedalKind) -> MedalRecord {
        MedalRecord {
            country: "USA".to_string(),
            discipline: discipline.to_string(),
            kind,
            date: None,
        }
    }

    #[test]
    fn test_empty_records_yield_no_graph() {
        assert_eq!(build_flow(&[], DEFAULT_TOP_DISCIPLINES), None);
    }

    #[test]
    fn test_discipline_side_never_exceeds_cap_plus_other() {
        // 20 distinct disciplines, one record each.
        let records: Vec<MedalRecord> = (0..20)
            .map(|i| record(&format!("Sport{i}"), MedalKind::Gold))
            .collect();
        let graph = build_flow(&records, DEFAULT_TOP_DISCIPLINES).unwrap();
        let left = graph
            .nodes
            .iter()
            .filter(|n| n.side == FlowSide::Left)
            .count();
        assert!(left <= DEFAULT_TOP_DISCIPLINES + 1);
        assert!(graph.nodes.iter().any(|n| n.name == OTHER_BUCKET));
    }

    #[test]
    fn test_node_ordering() {
        let records = vec![
            record("Judo", MedalKind::Bronze),
            record("Swimming", MedalKind::Gold),
            record("Swimming", MedalKind::Silver),
            record("Swimming", MedalKind::Bronze),
            record("Judo", MedalKind::Gold),
            record("Athletics", MedalKind::Gold),
        ];
        let graph = build_flow(&records, DEFAULT_TOP_DISCIPLINES).unwrap();
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        // disciplines by descending count, then the fixed medal order
        assert_eq!(
            names,
            vec![
                "Swimming",
                "Judo",
                "Athletics",
                "Gold Medal",
                "Silver Medal",
                "Bronze Medal"
            ]
        );
    }

    #[test]
    fn test_absent_medal_kinds_are_omitted() {
        let records = vec![
            record("Judo", MedalKind::Gold),
            record("Judo", MedalKind::Bronze),
        ];
        let graph = build_flow(&records, DEFAULT_TOP_DISCIPLINES).unwrap();
        let right: Vec<&str> = graph
            .nodes
            .iter()
            .filter(|n| n.side == FlowSide::Right)
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(right, vec!["Gold Medal", "Bronze Medal"]);
    }

    #[test]
    fn test_links_conserve_record_count() {
        let mut records = Vec::new();
        for i in 0..15 {
            for _ in 0..=i {
                records.push(record(&format!("Sport{i}"), MedalKind::Silver));
            }
        }
        let graph = build_flow(&records, 3).unwrap();
        let total: u32 = graph.links.iter().map(|l| l.value).sum();
        assert_eq!(total as usize, records.len());

        // every link points from the left block into the right block
        let left = graph
            .nodes
            .iter()
            .filter(|n| n.side == FlowSide::Left)
            .count();
        assert!(graph
            .links
            .iter()
            .all(|l| l.source < left && l.target >= left && l.target < graph.nodes.len()));
    }

    #[test]
    fn test_other_bucket_absorbs_tail_counts() {
        let records = vec![
            record("Swimming", MedalKind::Gold),
            record("Swimming", MedalKind::Gold),
            record("Judo", MedalKind::Gold),
            record("Fencing", MedalKind::Gold),
        ];
        let graph = build_flow(&records, 1).unwrap();
        // Swimming survives, Judo + Fencing collapse into Other (count 2).
        let other_link: u32 = graph
            .links
            .iter()
            .filter(|l| graph.nodes[l.source].name == OTHER_BUCKET)
            .map(|l| l.value)
            .sum();
        assert_eq!(other_link, 2);
    }
}
