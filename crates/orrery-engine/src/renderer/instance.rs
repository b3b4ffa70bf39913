use bytemuck::{Pod, Zeroable};
use crate::components::mesh::{BlendMode, Geometry, MeshComponent};

/// Per-instance render data read by the JS renderer.
/// Must match the TypeScript protocol: 28 floats = 112 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    /// World matrix, column-major.
    pub model: [f32; 16],
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub shininess: f32,
    /// 0 = sphere, 1 = ring.
    pub kind: f32,
    /// Sphere radius, or ring inner radius.
    pub inner: f32,
    /// Ring outer radius (0 for spheres).
    pub outer: f32,
    /// Bit flags, see the `FLAG_*` constants.
    pub flags: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const KIND_SPHERE: f32 = 0.0;
    pub const KIND_RING: f32 = 1.0;

    pub const FLAG_ADDITIVE: u32 = 1;
    pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;
    pub const FLAG_UNLIT: u32 = 1 << 2;

    pub fn from_mesh(model: [f32; 16], mesh: &MeshComponent) -> Self {
        let m = &mesh.material;
        let (kind, inner, outer) = match mesh.geometry {
            Geometry::Sphere { radius } => (Self::KIND_SPHERE, radius, 0.0),
            Geometry::Ring { inner, outer } => (Self::KIND_RING, inner, outer),
        };
        let mut flags = 0;
        if m.blend == BlendMode::Additive {
            flags |= Self::FLAG_ADDITIVE;
        }
        if m.double_sided {
            flags |= Self::FLAG_DOUBLE_SIDED;
        }
        if !m.lit {
            flags |= Self::FLAG_UNLIT;
        }
        Self {
            model,
            color: m.color.to_rgb_f32(),
            opacity: m.opacity,
            emissive: m.emissive.to_rgb_f32(),
            shininess: m.shininess,
            kind,
            inner,
            outer,
            flags: flags as f32,
        }
    }
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    /// Opaque instances first, then translucent ones from `translucent_start`.
    pub instances: Vec<MeshInstance>,
    pub translucent_start: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            translucent_start: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.translucent_start = 0;
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn set_translucent_start(&mut self, split: u32) {
        self.translucent_start = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::Color;

    #[test]
    fn mesh_instance_is_28_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
        assert_eq!(MeshInstance::FLOATS, 28);
    }

    #[test]
    fn flags_follow_material() {
        let glow = MeshComponent::sphere(1.5, Color::new(0xff9800)).additive().unlit();
        let inst = MeshInstance::from_mesh([0.0; 16], &glow);
        assert_eq!(inst.flags as u32, MeshInstance::FLAG_ADDITIVE | MeshInstance::FLAG_UNLIT);
        assert_eq!(inst.inner, 1.5);

        let ring = MeshComponent::ring(1.5, 2.5, Color::WHITE);
        let inst = MeshInstance::from_mesh([0.0; 16], &ring);
        assert_eq!(inst.kind, MeshInstance::KIND_RING);
        assert_eq!(inst.flags as u32, MeshInstance::FLAG_DOUBLE_SIDED);
        assert_eq!(inst.outer, 2.5);
    }

    #[test]
    fn buffer_push_and_view() {
        let mut buf = RenderBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats().len(), 2 * MeshInstance::FLOATS);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
