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

//! ingestion of raw telemetry batches. The wire format is a JSON array of entity
//! records, each carrying a newest-first list of timestamped coordinates:
//!
//! ```json
//! [ { "id": "N12345",
//!     "coordinates": [ { "value": [-122.04, 37.17], "time": "2026-08-27T10:15:00Z",
//!                        "speed": 245.0, "heading": 87.5 } ] } ]
//! ```
//!
//! Parsing is tolerant - a malformed record or sample drops that entity from the
//! batch with a warning but never fails the batch. How the JSON text got here
//! (HTTP poll, websocket push) is the embedding application's business

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use flightview_common::{angle::Angle360, datetime::EpochMillis, geo::GeoPoint, uom::knots};

use crate::errors::Result;
use crate::{TrackPoint,TrackUpdate};
use crate::warn;

/// one entity record as it appears on the wire
#[derive(Deserialize,Debug)]
pub struct FeedRecord {
    pub id: String,
    pub coordinates: Vec<FeedCoordinate>, // newest first, only the newest is consumed per batch
}

/// one raw position sample: `value` is `[lon, lat]` in decimal degrees, `time` is
/// ISO-8601, `speed` is in knots, `heading` in degrees clockwise from north
#[derive(Deserialize,Debug)]
pub struct FeedCoordinate {
    pub value: Vec<f64>,
    pub time: String,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
}

/// parse a feed batch. The outer JSON array has to be well-formed but records that
/// fail to deserialize are skipped with a warning
pub fn parse_feed (json: &str)->Result<Vec<FeedRecord>> {
    let values: Vec<Value> = serde_json::from_str( json)?;

    let mut records: Vec<FeedRecord> = Vec::with_capacity( values.len());
    for value in values {
        match serde_json::from_value::<FeedRecord>( value) {
            Ok(rec) => records.push( rec),
            Err(e) => warn!( "skipping malformed feed record: {}", e),
        }
    }
    Ok(records)
}

/// normalize parsed feed records into track updates: newest sample only, degrees
/// normalized, knots into a typed Velocity, RFC-3339 time into EpochMillis. Records
/// without a usable newest sample are skipped with a warning
pub fn track_updates_from (records: Vec<FeedRecord>)->Vec<TrackUpdate> {
    let mut updates: Vec<TrackUpdate> = Vec::with_capacity( records.len());

    for rec in records {
        match track_point_from( &rec) {
            Some(point) => updates.push( TrackUpdate { id: rec.id, point }),
            None => warn!( "skipping feed record without usable position: '{}'", rec.id),
        }
    }
    updates
}

/// parse and normalize in one step
pub fn track_updates_from_json (json: &str)->Result<Vec<TrackUpdate>> {
    Ok( track_updates_from( parse_feed( json)?))
}

fn track_point_from (rec: &FeedRecord)->Option<TrackPoint> {
    let newest = rec.coordinates.first()?;
    if newest.value.len() < 2 {
        return None
    }

    let date = match DateTime::parse_from_rfc3339( &newest.time) {
        Ok(dt) => EpochMillis::from( dt),
        Err(e) => {
            warn!( "unparsable sample time '{}' for '{}': {}", newest.time, rec.id, e);
            return None
        }
    };

    let pos = GeoPoint::from_lon_lat_degrees( newest.value[0], newest.value[1]);
    let speed = newest.speed.filter( |s| *s >= 0.0).map( knots); // negative speed is garbage
    let hdg = newest.heading.map( Angle360::from_degrees);

    Some( TrackPoint { pos, date, speed, hdg })
}
