use bucketmap_core::{Coordinate, NEW_PLACE_NAME, Place, Viewport};
use uuid::Uuid;

#[test]
fn new_place_sets_defaults() {
    let place = Place::new(Coordinate::new(50.0, 0.0));

    assert!(!place.id.is_nil());
    assert_eq!(place.name, NEW_PLACE_NAME);
    assert_eq!(place.description, "");
    assert_eq!(place.latitude, 50.0);
    assert_eq!(place.longitude, 0.0);
}

#[test]
fn coordinate_accessor_returns_position() {
    let place = Place::new(Coordinate::new(48.8566, 2.3522));

    let coordinate = place.coordinate();
    assert_eq!(coordinate.latitude, 48.8566);
    assert_eq!(coordinate.longitude, 2.3522);
}

#[test]
fn equality_compares_id_only() {
    let id = Uuid::new_v4();
    let original = Place::with_id(id, Coordinate::new(50.0, 0.0));

    let mut edited = original.clone();
    edited.name = "Eiffel Tower".to_string();
    edited.description = "Iron lattice tower".to_string();
    edited.latitude = 48.8584;
    edited.longitude = 2.2945;
    assert_eq!(original, edited);

    let other = Place::with_id(Uuid::new_v4(), Coordinate::new(50.0, 0.0));
    assert_ne!(original, other);
}

#[test]
fn place_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut place = Place::with_id(id, Coordinate::new(51.5007, -0.1246));
    place.name = "Big Ben".to_string();
    place.description = "Clock tower in Westminster".to_string();

    let json = serde_json::to_value(&place).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Big Ben");
    assert_eq!(json["description"], "Clock tower in Westminster");
    assert_eq!(json["latitude"].as_f64().unwrap(), 51.5007);
    assert_eq!(json["longitude"].as_f64().unwrap(), -0.1246);

    let decoded: Place = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.id, place.id);
    assert_eq!(decoded.name, place.name);
    assert_eq!(decoded.description, place.description);
    assert_eq!(decoded.latitude, place.latitude);
    assert_eq!(decoded.longitude, place.longitude);
}

#[test]
fn place_decodes_from_host_document_shape() {
    let raw = r#"{
        "id": "7f3de1f2-9f40-4b8a-8f86-28f2f6a1d9b0",
        "name": "Sagrada Familia",
        "description": "Unfinished basilica",
        "latitude": 41.4036,
        "longitude": 2.1744
    }"#;

    let place: Place = serde_json::from_str(raw).unwrap();
    assert_eq!(place.id.to_string(), "7f3de1f2-9f40-4b8a-8f86-28f2f6a1d9b0");
    assert_eq!(place.name, "Sagrada Familia");
    assert_eq!(place.description, "Unfinished basilica");
    assert_eq!(place.latitude, 41.4036);
    assert_eq!(place.longitude, 2.1744);
}

#[test]
fn viewport_default_matches_initial_region() {
    let viewport = Viewport::default();

    assert_eq!(viewport.center, Coordinate::new(50.0, 0.0));
    assert_eq!(viewport.latitude_span, 25.0);
    assert_eq!(viewport.longitude_span, 25.0);
}
