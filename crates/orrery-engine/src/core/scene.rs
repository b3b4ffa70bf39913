use glam::{Mat4, Vec3};
use crate::api::types::NodeId;
use crate::components::node::Node;

/// Simple node storage using a flat Vec.
/// Designed for small scenes (tens to hundreds of nodes, not millions).
/// Hierarchy is expressed through `Node::parent`; world transforms are
/// composed on demand by walking up the parent chain.
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a root-level node.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Add a node as a child of `parent`.
    pub fn spawn_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        self.spawn(node)
    }

    /// Remove a node and every descendant. Returns the removed node if found.
    pub fn despawn(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.swap_remove(idx);

        let orphans: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.parent == Some(id))
            .map(|n| n.id)
            .collect();
        for child in orphans {
            self.despawn(child);
        }
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Direct children of a node, in spawn order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Compose the node's transform with all of its ancestors.
    /// A broken or cyclic chain stops at the last reachable ancestor.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.get(id)?;
        let mut matrix = node.local_matrix();
        let mut depth = 0;
        while let Some(parent_id) = node.parent {
            depth += 1;
            if depth > self.nodes.len() {
                break;
            }
            let Some(parent) = self.get(parent_id) else { break };
            matrix = parent.local_matrix() * matrix;
            node = parent;
        }
        Some(matrix)
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| m.w_axis.truncate())
    }

    /// World-space scale along each local axis.
    pub fn world_scale(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| {
            Vec3::new(
                m.x_axis.truncate().length(),
                m.y_axis.truncate().length(),
                m.z_axis.truncate().length(),
            )
        })
    }

    /// True when the node and all of its ancestors are visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = self.get(id);
        let mut depth = 0;
        while let Some(node) = current {
            if !node.visible {
                return false;
            }
            depth += 1;
            if depth > self.nodes.len() {
                break;
            }
            current = node.parent.and_then(|p| self.get(p));
        }
        true
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Node::new(NodeId(1)).with_position(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.get(id).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn child_inherits_parent_scale_and_position() {
        let mut scene = Scene::new();
        let parent = scene.spawn(
            Node::new(NodeId(1))
                .with_position(Vec3::new(10.0, 0.0, 0.0))
                .with_scale(3.0),
        );
        let child = scene.spawn_child(parent, Node::new(NodeId(2)).with_position(Vec3::X));

        let pos = scene.world_position(child).unwrap();
        assert!((pos - Vec3::new(13.0, 0.0, 0.0)).length() < 1e-5);
        let scale = scene.world_scale(child).unwrap();
        assert!((scale - Vec3::splat(3.0)).length() < 1e-5);
    }

    #[test]
    fn despawn_removes_descendants() {
        let mut scene = Scene::new();
        let root = scene.spawn(Node::new(NodeId(1)));
        let child = scene.spawn_child(root, Node::new(NodeId(2)));
        scene.spawn_child(child, Node::new(NodeId(3)));
        scene.spawn(Node::new(NodeId(4)));

        scene.despawn(root);
        assert_eq!(scene.len(), 1);
        assert!(scene.get(NodeId(4)).is_some());
    }

    #[test]
    fn hidden_parent_hides_child() {
        let mut scene = Scene::new();
        let parent = scene.spawn(Node::new(NodeId(1)).with_visible(false));
        let child = scene.spawn_child(parent, Node::new(NodeId(2)));
        assert!(!scene.is_visible(child));

        scene.get_mut(parent).unwrap().visible = true;
        assert!(scene.is_visible(child));
    }

    #[test]
    fn children_lists_direct_children_only() {
        let mut scene = Scene::new();
        let root = scene.spawn(Node::new(NodeId(1)));
        let a = scene.spawn_child(root, Node::new(NodeId(2)).with_tag("a"));
        scene.spawn_child(a, Node::new(NodeId(3)));
        let tags: Vec<&str> = scene.children(root).map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["a"]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Node::new(NodeId(1)).with_tag("Sun"));
        scene.spawn(Node::new(NodeId(2)).with_tag("Earth"));
        assert_eq!(scene.find_by_tag("Earth").unwrap().id, NodeId(2));
    }
}
