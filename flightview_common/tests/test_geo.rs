/*
 * Copyright © 2026, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “flightview” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use uom::si::length::meter;
use flightview_common::angle::*;
use flightview_common::geo::*;
use flightview_common::geo_constants::MEAN_EARTH_RADIUS;

// run with "cargo test test_point_serde -- --nocapture"

#[test]
fn test_point_serde() {
    let input = r#"{ "longitude": -122.0, "latitude": 37.0 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("deserialized GeoPoint: {p:?}");
    assert_eq!( p.longitude().degrees(), -122.0);
    assert_eq!( p.latitude().degrees(), 37.0);

    // alternative deserialization formats
    let input = r#"{ "lon": -122.0, "lat": 37.0 }"#;
    let p1: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("alternative input: '{}' -> {}", input, p1);
    assert_eq!( p, p1);

    let input = r#"{ "x": -122.0, "y": 37.0 }"#;
    let p2: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("alternative input: '{}' -> {}", input, p2);
    assert_eq!( p, p2);

    let s: String = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);
}

#[test]
fn test_bearing() {
    let p = GeoPoint::from_lon_lat_degrees( -122.0, 37.0);

    let north = GeoPoint::from_lon_lat_degrees( -122.0, 37.5);
    let east  = GeoPoint::from_lon_lat_degrees( -121.5, 37.0);
    let south = GeoPoint::from_lon_lat_degrees( -122.0, 36.5);

    let b = p.bearing_to( &north);
    println!("bearing to north point: {}", b);
    assert!( b.degrees().abs() < 1e-6 || (b.degrees() - 360.0).abs() < 1e-6);

    let b = p.bearing_to( &east);
    println!("bearing to east point: {}", b);
    assert!( (b.degrees() - 90.0).abs() < 0.5); // slight great circle deviation

    let b = p.bearing_to( &south);
    println!("bearing to south point: {}", b);
    assert!( (b.degrees() - 180.0).abs() < 1e-6);

    let b = north.bearing_from( &p);
    assert!( b.degrees().abs() < 1e-6 || (b.degrees() - 360.0).abs() < 1e-6);
}

#[test]
fn test_haversine_distance() {
    let p0 = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let p1 = GeoPoint::from_lon_lat_degrees( 0.0, 1.0);

    let dist = p0.haversine_distance_to( &p1).get::<meter>();
    let expected = MEAN_EARTH_RADIUS * 1.0f64.to_radians();
    println!("1 deg latitude arc: {} m (expected ~{} m)", dist, expected);
    assert!( (dist - expected).abs() < 100.0); // metric space radius differs slightly from our constant
}

#[test]
fn test_rect() {
    let rect = GeoRect::from_wsen(
        Longitude::from_degrees(-122.0), Latitude::from_degrees(33.0),
        Longitude::from_degrees(-121.0), Latitude::from_degrees(36.0)
    );
    println!("rect: {:?}", rect);

    assert!( rect.contains( &GeoPoint::from_lon_lat_degrees( -121.5, 35.0)));
    assert!( !rect.contains( &GeoPoint::from_lon_lat_degrees( -120.0, 35.0)));

    let s = serde_json::to_string(&rect).unwrap();
    println!("serialized GeoRect: '{}'", s);

    let rect1: GeoRect = serde_json::from_str(&s).unwrap();
    assert_eq!( rect1.west().degrees(), -122.0);
    assert_eq!( rect1.north().degrees(), 36.0);
}

#[test]
fn test_linestring() {
    let ps = vec![
        GeoPoint::from_lon_lat_degrees( -122.0, 37.0),
        GeoPoint::from_lon_lat_degrees( -122.1, 37.1),
        GeoPoint::from_lon_lat_degrees( -122.2, 37.2),
    ];
    let ls = GeoLineString::from_geo_points(ps.clone());
    assert_eq!( ls.coords_count(), 3);
    assert_eq!( ls.as_geo_points(), ps);

    let s = serde_json::to_string(&ls).unwrap();
    println!("serialized GeoLineString: '{}'", s);
    assert!( s.starts_with( r#"{"points":[{"lon":-122.0"#));
}
