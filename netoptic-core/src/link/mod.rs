mod catalog;
mod id;
mod topology;

pub use self::{
    catalog::{LinkCatalog, LinkClass, LinkEntry, UnknownLinkError},
    id::LinkId,
    topology::{NodeGroup, Topology, TopologyEdge, TopologyNode},
};
