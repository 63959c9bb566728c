//! Collapsing repeated observations of the same station.

use std::collections::HashMap;

use geo_common::{Location, Observation};

// -0.0 and 0.0 compare equal, so fold them onto one key
fn location_key(location: &Location) -> (u64, u64) {
    ((location.lat + 0.0).to_bits(), (location.lon + 0.0).to_bits())
}

/// Average all observations taken at exactly the same location.
///
/// Output order follows the first appearance of each location.
pub fn average_by_location<I>(observations: I) -> Vec<Observation>
where
    I: IntoIterator<Item = Observation>,
{
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut sums: Vec<(Location, f64, usize)> = Vec::new();

    for observation in observations {
        let key = location_key(&observation.location);
        match index.get(&key) {
            Some(&slot) => {
                let entry = &mut sums[slot];
                entry.1 += observation.value;
                entry.2 += 1;
            }
            None => {
                index.insert(key, sums.len());
                sums.push((observation.location, observation.value, 1));
            }
        }
    }

    sums.into_iter()
        .map(|(location, sum, count)| Observation::new(location, sum / count as f64))
        .collect()
}
