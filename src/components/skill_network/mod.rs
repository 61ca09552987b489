mod camera;
mod component;
mod config;
mod error;
mod frame;
mod layout;
mod particles;
mod projection;
mod render;
mod scene;
mod state;
mod types;

pub use component::SkillNetworkCanvas;
pub use types::SkillRecord;
