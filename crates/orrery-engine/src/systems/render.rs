use crate::core::scene::Scene;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer from the scene.
/// Flattens every visible mesh node to world space and groups instances:
/// opaque first, then translucent/additive. Sets `translucent_start` at the boundary.
pub fn build_render_buffer(scene: &Scene, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut opaque: Vec<MeshInstance> = Vec::new();
    let mut translucent: Vec<MeshInstance> = Vec::new();

    for node in scene.iter() {
        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };
        if !scene.is_visible(node.id) {
            continue;
        }
        let Some(world) = scene.world_matrix(node.id) else { continue };

        let instance = MeshInstance::from_mesh(world.to_cols_array(), mesh);
        if mesh.material.is_translucent() {
            translucent.push(instance);
        } else {
            opaque.push(instance);
        }
    }

    let split = opaque.len() as u32;

    for inst in opaque {
        buffer.push(inst);
    }
    buffer.set_translucent_start(split);
    for inst in translucent {
        buffer.push(inst);
    }
}
