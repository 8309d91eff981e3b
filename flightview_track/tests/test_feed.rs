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

// run with "cargo test -p flightview_track --test test_feed -- --nocapture"

use uom::si::velocity::{knot, meter_per_second};
use flightview_track::feed::{parse_feed, track_updates_from, track_updates_from_json};

const GOOD_BATCH: &'static str = r#"[
  { "id": "N700AB",
    "coordinates": [
      { "value": [-122.04, 37.17], "time": "2026-08-27T10:15:00Z", "speed": 245.0, "heading": 87.5 },
      { "value": [-122.10, 37.16], "time": "2026-08-27T10:14:30Z", "speed": 243.0, "heading": 86.0 } ] },
  { "id": "N701CD",
    "coordinates": [
      { "value": [2.35, 48.85], "time": "2026-08-27T10:15:02+00:00" } ] }
]"#;

// second record is malformed (coordinates is not an array), third has an empty sample list,
// fourth an unparsable time, fifth a truncated value pair
const MIXED_BATCH: &'static str = r#"[
  { "id": "GOOD", "coordinates": [ { "value": [10.0, 50.0], "time": "2026-08-27T10:15:00Z" } ] },
  { "id": "BROKEN", "coordinates": 42 },
  { "id": "EMPTY", "coordinates": [] },
  { "id": "BADTIME", "coordinates": [ { "value": [10.0, 50.0], "time": "yesterday-ish" } ] },
  { "id": "SHORT", "coordinates": [ { "value": [10.0], "time": "2026-08-27T10:15:00Z" } ] }
]"#;

const NEGATIVE_SPEED: &'static str = r#"[
  { "id": "N700AB", "coordinates": [ { "value": [-122.0, 37.0], "time": "2026-08-27T10:15:00Z", "speed": -3.0, "heading": 400.0 } ] }
]"#;

#[test]
fn test_good_batch () {
    let updates = track_updates_from_json( GOOD_BATCH).unwrap();
    for u in &updates { println!("{u}"); }
    assert_eq!( updates.len(), 2);

    let u0 = &updates[0];
    assert_eq!( u0.id, "N700AB");
    assert_eq!( u0.point.pos.longitude().degrees(), -122.04);
    assert_eq!( u0.point.pos.latitude().degrees(), 37.17);
    assert_eq!( u0.point.speed.unwrap().get::<knot>(), 245.0);
    assert_eq!( u0.point.hdg.unwrap().degrees(), 87.5);

    // only the newest (first) coordinate entry is consumed
    let dt = u0.point.date.millis_since( updates[1].point.date);
    assert_eq!( dt, -2000); // 10:15:00 vs 10:15:02

    let u1 = &updates[1];
    assert!( u1.point.speed.is_none());
    assert!( u1.point.hdg.is_none());
}

#[test]
fn test_knots_conversion () {
    let updates = track_updates_from_json( GOOD_BATCH).unwrap();
    let speed = updates[0].point.speed.unwrap();

    // 245 kn = 245 * 1852/3600 m/s
    let expected = 245.0 * 1852.0 / 3600.0;
    assert!( (speed.get::<meter_per_second>() - expected).abs() < 1e-9);
}

#[test]
fn test_malformed_records_skipped () {
    let records = parse_feed( MIXED_BATCH).unwrap();
    assert_eq!( records.len(), 4); // BROKEN already dropped by the tolerant parse

    let updates = track_updates_from( records);
    assert_eq!( updates.len(), 1); // EMPTY, BADTIME, SHORT dropped during normalization
    assert_eq!( updates[0].id, "GOOD");
}

#[test]
fn test_negative_speed_dropped () {
    let updates = track_updates_from_json( NEGATIVE_SPEED).unwrap();
    assert_eq!( updates.len(), 1);
    assert!( updates[0].point.speed.is_none()); // negative speed treated as absent
    assert_eq!( updates[0].point.hdg.unwrap().degrees(), 40.0); // 400 normalized into [0,360)
}

#[test]
fn test_invalid_outer_json_fails () {
    assert!( parse_feed( "{ not json ").is_err());
}
