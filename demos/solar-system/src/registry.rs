/// Live runtime records for the built scene.
///
/// Descriptors stay in the catalog's `Rc`s; scene nodes are referenced by id.
/// Nothing game-specific is stored on the nodes themselves.

use std::rc::Rc;
use glam::Vec3;
use orrery_engine::NodeId;
use crate::catalog::{BodyDescriptor, StarDescriptor};

/// One orbiting body as it currently is.
#[derive(Debug, Clone)]
pub struct BodyInstance {
    pub descriptor: Rc<BodyDescriptor>,
    pub node: NodeId,
    pub atmosphere: Option<NodeId>,
    pub rings: Option<NodeId>,
    /// Last computed orbital position.
    pub position: Vec3,
    /// Last applied uniform node scale.
    pub scale: f32,
    /// Accumulated spin about the local Y axis, radians.
    pub spin: f32,
    pub highlighted: bool,
}

impl BodyInstance {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Body instances, index-aligned with the catalog's body list.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<BodyInstance>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, body: BodyInstance) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&BodyInstance> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BodyInstance> {
        self.bodies.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyInstance> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BodyInstance> {
        self.bodies.iter_mut()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Static ring tracing a body's orbital path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitMarker {
    pub node: NodeId,
    /// Path radius in display units.
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct StarInstance {
    pub descriptor: StarDescriptor,
    pub node: NodeId,
    pub glow: NodeId,
    pub spin: f32,
    pub highlighted: bool,
}

/// Everything the builder produced. Owned by the game.
#[derive(Debug, Clone)]
pub struct SolarScene {
    pub star: StarInstance,
    pub bodies: BodyRegistry,
    pub orbits: Vec<OrbitMarker>,
}
