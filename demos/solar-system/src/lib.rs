use wasm_bindgen::prelude::*;

pub mod builder;
pub mod catalog;
pub mod game;
pub mod kinematics;
pub mod params;
pub mod picking;
pub mod registry;
pub mod selection;
pub mod ui;

pub use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
