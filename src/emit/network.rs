//! Simulation-network rendering of traced contours.
//!
//! Every contour point becomes a node; every consecutive point pair within
//! a contour becomes a directed link with fixed synthetic traffic
//! attributes. Node ids and link ids are 1-based, gapless, and assigned in
//! global traversal order (contour order, then point order). Links never
//! span a contour boundary. The id counters live inside `build_network`,
//! so concurrent invocations stay independent.
use crate::error::Error;
use crate::types::Contour;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Fixed name the document carries regardless of the input file.
pub const NETWORK_FILE_NAME: &str = "network.xml";

const DOCTYPE: &str =
    "<!DOCTYPE network SYSTEM \"http://www.matsim.org/files/dtd/network_v1.dtd\">";

/// Synthetic traffic attributes stamped on every link.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NetworkParams {
    /// Link length in network units (not measured from geometry).
    pub link_length: f64,
    /// Vehicles per capacity period.
    pub capacity: u32,
    /// Free speed in network units per second.
    pub freespeed: f64,
    /// Permitted lane count.
    pub permlanes: u32,
    /// Capacity period declared on the links section.
    pub capperiod: String,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            link_length: 10000.0,
            capacity: 36000,
            freespeed: 27.78,
            permlanes: 1,
            capperiod: "01:00:00".to_string(),
        }
    }
}

/// A network vertex at a contour point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: u64,
    pub x: i32,
    pub y: i32,
}

/// A directed edge between consecutive nodes of one contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub id: u64,
    pub from: u64,
    pub to: u64,
}

/// Assign node and link ids by global traversal order.
pub fn build_network(contours: &[Contour]) -> (Vec<Node>, Vec<Link>) {
    let point_count: usize = contours.iter().map(Vec::len).sum();
    let mut nodes = Vec::with_capacity(point_count);
    let mut links = Vec::with_capacity(point_count.saturating_sub(contours.len()));

    let mut node_id: u64 = 0;
    let mut link_id: u64 = 0;

    for contour in contours {
        // The chain restarts on every contour; the global counters do not.
        let mut prev: Option<u64> = None;
        for p in contour {
            node_id += 1;
            nodes.push(Node {
                id: node_id,
                x: p.x,
                y: p.y,
            });
            if let Some(from) = prev {
                link_id += 1;
                links.push(Link {
                    id: link_id,
                    from,
                    to: node_id,
                });
            }
            prev = Some(node_id);
        }
    }

    (nodes, links)
}

/// Render the network document.
pub fn render_network(contours: &[Contour], params: &NetworkParams) -> String {
    let (nodes, links) = build_network(contours);

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    doc.push_str(DOCTYPE);
    doc.push_str("\n\n");
    let _ = writeln!(doc, "<network name=\"{NETWORK_FILE_NAME}\">");

    doc.push_str("<nodes>\n");
    for node in &nodes {
        let _ = writeln!(doc, "<node id=\"{}\" x=\"{}\" y=\"{}\"/>", node.id, node.x, node.y);
    }
    doc.push_str("</nodes>\n");

    let _ = writeln!(doc, "<links capperiod=\"{}\">", params.capperiod);
    for link in &links {
        let _ = writeln!(
            doc,
            "<link id=\"{}\" from=\"{}\" to=\"{}\" length=\"{:.2}\" capacity=\"{}\" freespeed=\"{:.2}\" permlanes=\"{}\"/>",
            link.id, link.from, link.to, params.link_length, params.capacity, params.freespeed, params.permlanes
        );
    }
    doc.push_str("</links>\n");
    doc.push_str("</network>\n");

    doc
}

/// Render and persist the document at `path`.
pub fn write_network(path: &Path, contours: &[Contour], params: &NetworkParams) -> Result<(), Error> {
    fs::write(path, render_network(contours, params)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn ids_are_global_gapless_and_never_cross_contours() {
        let contours = vec![vec![p(0, 0), p(1, 0), p(2, 0)], vec![p(5, 5), p(6, 5)]];
        let (nodes, links) = build_network(&contours);

        assert_eq!(nodes.len(), 5);
        assert_eq!(
            nodes.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );

        assert_eq!(links.len(), 3);
        assert_eq!(
            links.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!((links[0].from, links[0].to), (1, 2));
        assert_eq!((links[1].from, links[1].to), (2, 3));
        // The second contour's chain starts fresh: no link 3 -> 4.
        assert_eq!((links[2].from, links[2].to), (4, 5));
    }

    #[test]
    fn empty_and_single_point_contours_produce_no_links() {
        let contours = vec![vec![], vec![p(9, 9)]];
        let (nodes, links) = build_network(&contours);
        assert_eq!(nodes.len(), 1);
        assert!(links.is_empty());
    }

    #[test]
    fn document_orders_header_nodes_then_links() {
        let contours = vec![vec![p(10, 20), p(11, 20)]];
        let doc = render_network(&contours, &NetworkParams::default());

        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(doc.contains(DOCTYPE));
        assert!(doc.contains("<network name=\"network.xml\">"));

        let nodes_at = doc.find("<nodes>").expect("nodes block");
        let links_at = doc.find("<links capperiod=\"01:00:00\">").expect("links block");
        assert!(nodes_at < links_at);

        assert!(doc.contains("<node id=\"1\" x=\"10\" y=\"20\"/>"));
        assert!(doc.contains(
            "<link id=\"1\" from=\"1\" to=\"2\" length=\"10000.00\" capacity=\"36000\" freespeed=\"27.78\" permlanes=\"1\"/>"
        ));
    }

    #[test]
    fn empty_contour_set_yields_empty_sections() {
        let doc = render_network(&[], &NetworkParams::default());
        assert!(doc.contains("<nodes>\n</nodes>"));
        assert!(doc.contains("<links capperiod=\"01:00:00\">\n</links>"));
    }
}
