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

// run with "cargo test -p flightview_track --test test_trail -- --nocapture"

use flightview_common::{datetime::EpochMillis, geo::GeoPoint};
use flightview_track::{trail::track_trail, Track, TrackPoint};

fn point (lon: f64, lat: f64, millis: i64) -> TrackPoint {
    TrackPoint { pos: GeoPoint::from_lon_lat_degrees( lon, lat), date: EpochMillis::new( millis), speed: None, hdg: None }
}

#[test]
fn test_trail_order () {
    let mut track: Track<()> = Track::new( "TEST".to_string(), point( 1.0, 10.0, 1000), (), 10);
    track.push_point( point( 2.0, 20.0, 2000));
    track.push_point( point( 3.0, 30.0, 3000));
    track.current = GeoPoint::from_lon_lat_degrees( 3.5, 35.0); // extrapolated beyond the newest sample

    let trail = track_trail( &track);
    let points = trail.as_geo_points();
    println!("trail: {:?}", points);

    assert_eq!( points.len(), 4);
    assert_eq!( points[0], track.current);                             // current first
    assert_eq!( points[1], GeoPoint::from_lon_lat_degrees( 3.0, 30.0)); // then newest
    assert_eq!( points[2], GeoPoint::from_lon_lat_degrees( 2.0, 20.0));
    assert_eq!( points[3], GeoPoint::from_lon_lat_degrees( 1.0, 10.0)); // to oldest
}

#[test]
fn test_trail_capacity () {
    let max_points = 10;
    let mut track: Track<()> = Track::new( "TEST".to_string(), point( 0.0, 0.0, 0), (), max_points);
    for i in 1..20 {
        track.push_point( point( i as f64, 0.0, (i * 1000) as i64));
    }
    assert_eq!( track.points.len(), max_points); // the ringbuffer caps history

    track.current = track.newest().pos;
    let trail = track_trail( &track);

    // trail is capped at the same bound: current plus the newest max_points-1 samples
    assert_eq!( trail.coords_count(), max_points);
    let points = trail.as_geo_points();
    assert_eq!( points[0], track.current);
    assert_eq!( points[1], GeoPoint::from_lon_lat_degrees( 19.0, 0.0));
    assert_eq!( points[max_points-1], GeoPoint::from_lon_lat_degrees( 11.0, 0.0));
}
