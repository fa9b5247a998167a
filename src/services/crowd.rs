use rand::Rng;

use crate::models::{GeoPoint, Landmark};

/// Reference coordinate the jittered points cluster around (Times Square).
pub const CENTER_LAT: f64 = 40.7589;
pub const CENTER_LNG: f64 = -73.9851;

/// Total width of the jitter window in decimal degrees. Each jittered
/// coordinate lands within ±0.005° of the center.
const JITTER_SPAN_DEGREES: f64 = 0.01;

/// Number of jittered points emitted before the landmark points.
const JITTERED_POINT_COUNT: usize = 20;

/// Fixed landmark table. Order matters: the response appends these after
/// the jittered points, preserving table order.
pub const LANDMARKS: [Landmark; 5] = [
    Landmark {
        lat: 40.7505,
        lng: -73.9934,
        name: "Herald Square",
    },
    Landmark {
        lat: 40.7614,
        lng: -73.9776,
        name: "Central Park South",
    },
    Landmark {
        lat: 40.7580,
        lng: -73.9855,
        name: "Broadway Theater District",
    },
    Landmark {
        lat: 40.7549,
        lng: -73.9840,
        name: "Garment District",
    },
    Landmark {
        lat: 40.7527,
        lng: -73.9772,
        name: "Koreatown",
    },
];

/// Generate the full set of mock heatmap points: 20 points jittered
/// around the center, then one point per landmark with its coordinates
/// copied verbatim. Every intensity is a fresh uniform draw in [0, 1).
///
/// The randomness source is injected so tests can pass a seeded
/// generator; the HTTP handler passes the thread-local one.
pub fn generate_crowd_data<R: Rng>(rng: &mut R) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(JITTERED_POINT_COUNT + LANDMARKS.len());

    for _ in 0..JITTERED_POINT_COUNT {
        let lat = CENTER_LAT + (rng.gen::<f64>() - 0.5) * JITTER_SPAN_DEGREES;
        let lng = CENTER_LNG + (rng.gen::<f64>() - 0.5) * JITTER_SPAN_DEGREES;
        points.push(GeoPoint::new(lat, lng, rng.gen::<f64>(), "Times Square"));
    }

    for landmark in LANDMARKS {
        points.push(GeoPoint::new(
            landmark.lat,
            landmark.lng,
            rng.gen::<f64>(),
            landmark.name,
        ));
    }

    points
}
