use crate::link::{LinkCatalog, LinkId};
use serde::Serialize;

/// Role of a [`TopologyNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    /// An aggregation link.
    Link,
    /// A radio cell feeding a link.
    Cell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyNode {
    pub id: String,
    pub group: NodeGroup,
}

/// A cell attached to a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyEdge {
    pub source: String,
    pub target: String,
}

/// Static link/cell graph of a deployment.
///
/// Cells are named `Cell-01`, `Cell-02`, ... and are attached to the
/// catalog's links in round-robin order, so with the default catalog each
/// of the three links aggregates eight cells.
///
/// ```
/// # use netoptic_core::link::{LinkCatalog, LinkId, Topology};
/// let topology = Topology::new(&LinkCatalog::default(), 24);
///
/// let cells: Vec<&str> = topology.cells_of(&LinkId::from("L-CHI-02")).collect();
/// assert_eq!(cells.len(), 8);
/// assert_eq!(cells[0], "Cell-02");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub nodes: Vec<TopologyNode>,
    #[serde(rename = "links")]
    pub edges: Vec<TopologyEdge>,
}

impl Topology {
    /// Build the graph for `cells` cells over the links of `catalog`.
    ///
    /// An empty catalog yields a graph with no nodes at all: cells need a
    /// link to be attached to.
    pub fn new(catalog: &LinkCatalog, cells: usize) -> Self {
        let links: Vec<&LinkId> = catalog.ids().collect();
        if links.is_empty() {
            return Self {
                nodes: Vec::new(),
                edges: Vec::new(),
            };
        }

        let mut nodes = Vec::with_capacity(links.len().saturating_add(cells));
        let mut edges = Vec::with_capacity(cells);

        nodes.extend(links.iter().map(|id| TopologyNode {
            id: id.to_string(),
            group: NodeGroup::Link,
        }));

        for i in 0..cells {
            let cell = cell_name(i);
            edges.push(TopologyEdge {
                source: links[i % links.len()].to_string(),
                target: cell.clone(),
            });
            nodes.push(TopologyNode {
                id: cell,
                group: NodeGroup::Cell,
            });
        }

        Self { nodes, edges }
    }

    /// Names of the cells attached to `link`, in cell order.
    pub fn cells_of<'a>(&'a self, link: &LinkId) -> impl Iterator<Item = &'a str> {
        self.edges
            .iter()
            .filter(move |edge| edge.source == link.as_str())
            .map(|edge| edge.target.as_str())
    }

    pub fn links(&self) -> impl Iterator<Item = &TopologyNode> {
        self.nodes
            .iter()
            .filter(|node| node.group == NodeGroup::Link)
    }

    pub fn cells(&self) -> impl Iterator<Item = &TopologyNode> {
        self.nodes
            .iter()
            .filter(|node| node.group == NodeGroup::Cell)
    }
}

fn cell_name(index: usize) -> String {
    format!("Cell-{:02}", index + 1)
}
