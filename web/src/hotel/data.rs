use shared_types::HotelRecord;

fn record(id: &str, name: &str, location: &str, description: &str, image: &str) -> HotelRecord {
    HotelRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// Reference set served when no data file is configured.
pub fn builtin_hotels() -> Vec<HotelRecord> {
    vec![
        record(
            "h1",
            "Ocean View",
            "Lisbon, Portugal",
            "Cliffside rooms with floor-to-ceiling windows over the Atlantic.\n\nBreakfast is served on the terrace every morning, and the old town is a short tram ride away.",
            "/images/ocean-view.svg",
        ),
        record(
            "h2",
            "Alpine Lodge",
            "Zermatt, Switzerland",
            "A timber lodge at the foot of the Matterhorn with a heated outdoor pool and direct access to the ski lifts.",
            "/images/alpine-lodge.svg",
        ),
        record(
            "h3",
            "Desert Rose Retreat",
            "Marrakech, Morocco",
            "Riad suites around a tiled courtyard garden, with a rooftop lounge overlooking the medina.",
            "/images/desert-rose.svg",
        ),
        record(
            "h4",
            "Harbour Lights",
            "Sydney, Australia",
            "Modern rooms facing the harbour bridge, a short walk from the opera house and Circular Quay.",
            "/images/harbour-lights.svg",
        ),
        record(
            "h5",
            "Sakura House",
            "Kyoto, Japan",
            "A restored machiya townhouse with tatami rooms, a private tea garden and cypress soaking tubs.",
            "/images/sakura-house.svg",
        ),
        record(
            "h6",
            "Midnight Loft",
            "New York, USA",
            "Industrial lofts in SoHo with exposed brick, a rooftop bar and late-night room service.",
            "/images/midnight-loft.svg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::hotel::{HotelDirectory, StaticHotelDirectory};

    fn assert_served(hotels: &[HotelRecord]) {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for hotel in hotels {
            let relative = hotel.image.trim_start_matches('/');
            assert!(
                public.join(relative).is_file(),
                "{} points at missing asset {}",
                hotel.id,
                hotel.image
            );
        }
    }

    #[test]
    fn builtin_images_exist_in_public_assets() {
        assert_served(&builtin_hotels());
    }

    #[test]
    fn sample_data_images_exist_in_public_assets() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/hotels.sample.json");
        let directory = StaticHotelDirectory::load(path).unwrap();
        assert_served(&directory.all());
    }
}
