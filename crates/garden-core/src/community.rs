//! Aggregation of plant rows into community totals.

use std::collections::HashMap;

use crate::models::{CommunityPlant, Plant};

/// Group plants by exact name, summing quantities and counting rows.
///
/// Groups keep first-seen order and take `image_url` from the first row of
/// each name. Feed rows newest-first to surface the newest image.
pub fn aggregate(plants: &[Plant]) -> Vec<CommunityPlant> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<CommunityPlant> = Vec::new();

    for plant in plants {
        match index.get(plant.name.as_str()) {
            Some(&i) => {
                let entry = &mut out[i];
                entry.total_quantity += plant.quantity as u64;
                entry.gardener_count += 1;
            }
            None => {
                index.insert(plant.name.as_str(), out.len());
                out.push(CommunityPlant {
                    name: plant.name.clone(),
                    image_url: plant.image_url.clone(),
                    total_quantity: plant.quantity as u64,
                    gardener_count: 1,
                });
            }
        }
    }

    out
}
