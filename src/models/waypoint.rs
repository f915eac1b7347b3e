/// A geographic point extracted from a KML placemark.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub description: Option<String>,
}
