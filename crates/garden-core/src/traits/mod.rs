mod community_query;
mod plant_store;

pub use community_query::CommunityQuery;
pub use plant_store::PlantStore;
