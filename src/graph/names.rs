use crate::{graph::VertexId, GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;

/// Optional labels of vertices, index-aligned with them.
///
/// Labels are unique within a graph.
/// They follow vertices when indices shift, and algorithms never look at them.
#[derive(Clone)]
pub struct VertexNames {
    names: BiHashMap<VertexId, String, RandomState, RandomState>,
}

impl Default for VertexNames {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VertexNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names.iter().collect();
        names.sort();
        f.debug_map().entries(names).finish()
    }
}

impl PartialEq for VertexNames {
    fn eq(&self, other: &Self) -> bool {
        self.names.len() == other.names.len()
            && self
                .names
                .iter()
                .all(|(vid, name)| other.names.get_by_left(vid) == Some(name))
    }
}

impl Eq for VertexNames {}

impl VertexNames {
    pub fn new() -> Self {
        Self {
            names: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name_of(&self, vid: VertexId) -> Option<&str> {
        self.names.get_by_left(&vid).map(|x| x.as_str())
    }

    pub fn vertex_of(&self, name: &str) -> Option<VertexId> {
        self.names.get_by_right(name).copied()
    }

    /// Names a vertex, replacing its former name if any.
    ///
    /// Fails if the name is held by another vertex.
    pub fn set(&mut self, vid: VertexId, name: String) -> Result<()> {
        match self.vertex_of(&name) {
            Some(holder) if holder != vid => Err(GraphError::DuplicateName(name)),
            _ => {
                let _ = self.names.insert(vid, name);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, vid: VertexId) -> Option<String> {
        self.names.remove_by_left(&vid).map(|(_, name)| name)
    }

    /// Drops the name of a removed vertex and shifts names of higher vertices down by one.
    pub fn remove_and_shift(&mut self, removed: VertexId) {
        let old = std::mem::replace(&mut self.names, Self::new().names);
        for (vid, name) in old.into_iter() {
            if vid < removed {
                let _ = self.names.insert(vid, name);
            } else if vid > removed {
                let _ = self.names.insert(VertexId(vid.0 - 1), name);
            }
        }
    }

    /// Drops names of vertices at or beyond `vertex_size`.
    pub fn truncate(&mut self, vertex_size: usize) {
        let old = std::mem::replace(&mut self.names, Self::new().names);
        for (vid, name) in old.into_iter().filter(|(vid, _)| vid.0 < vertex_size) {
            let _ = self.names.insert(vid, name);
        }
    }
}
