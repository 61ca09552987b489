pub mod nav;
pub mod section;
pub mod skill_network;
