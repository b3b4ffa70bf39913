use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;

/// Fat scene node: transform, hierarchy link and an optional mesh.
/// Nodes without a mesh are pure transform groups.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Name for lookups and debugging.
    pub tag: String,
    /// Parent node; transforms compose down the chain.
    pub parent: Option<NodeId>,
    /// Hidden nodes hide their whole subtree.
    pub visible: bool,
    /// Position relative to the parent.
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub mesh: Option<MeshComponent>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            parent: None,
            visible: true,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Parent-relative transform: scale, then rotate, then translate.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position)
    }
}
