pub mod community;
pub mod plant;
pub mod user;

pub use community::{CommunityPlant, PlantGardener};
pub use plant::{NewPlant, Plant, PlantPatch};
pub use user::User;
