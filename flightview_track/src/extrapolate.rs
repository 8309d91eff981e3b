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

//! position extrapolation between report batches. Two interchangeable projection models
//! behind one seam: kinematic dead reckoning from the newest sample's speed/heading, and
//! linear velocity derived from the two newest samples. Both use a flat-earth
//! approximation that is only valid for the short elapsed times the animator deals with -
//! this is display smoothing, not navigation

use std::time::Duration;
use serde::{Serialize,Deserialize};
use uom::si::velocity::meter_per_second;
use flightview_common::{
    datetime::EpochMillis,
    geo::GeoPoint,
    geo_constants::EQUATORIAL_EARTH_RADIUS,
};

use crate::{Track,TrackPoint};

/// lower bound for the cos(lat) longitude scale factor, to keep near-polar
/// projections finite
const MIN_LON_SCALE: f64 = 1e-6;

/// the projection model used to animate track positions between batches
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum Extrapolation {
    /// project along the newest sample's reported speed and heading
    DeadReckoning,

    /// project along the positional difference of the two newest samples
    LinearVelocity,
}

impl Extrapolation {

    /// projected position of `track` at instant `now`. If the newest sample is older
    /// than `max_sample_age` the track is frozen and we return its last known position
    /// unextrapolated. Projections never fail - models that cannot be applied (missing
    /// velocity data, single sample, duplicate timestamps) degrade to the newest position
    pub fn project<H> (&self, track: &Track<H>, now: EpochMillis, max_sample_age: Duration)->GeoPoint {
        let s0 = track.newest();

        if now.duration_since( s0.date) > max_sample_age {
            return s0.pos // frozen - no motion assumed beyond the staleness cutoff
        }

        match self {
            Extrapolation::DeadReckoning => dead_reckon( s0, now),
            Extrapolation::LinearVelocity => linear_velocity( s0, track.points.get(1), now),
        }
    }
}

/// kinematic dead reckoning: displace the newest sample along its reported course,
/// assuming constant speed and heading since the report
fn dead_reckon (s0: &TrackPoint, now: EpochMillis)->GeoPoint {
    let (Some(speed), Some(hdg)) = (s0.speed, s0.hdg) else {
        return s0.pos // no velocity vector to reckon with
    };

    let dt = now.duration_since( s0.date).as_secs_f64();
    let dist = speed.get::<meter_per_second>() * dt; // meters

    let dn = dist * hdg.cos(); // northing component
    let de = dist * hdg.sin(); // easting component

    let lat = s0.pos.latitude();
    let lon = s0.pos.longitude();

    let lon_scale = lat.cos().max( MIN_LON_SCALE);

    let dlat = (dn / EQUATORIAL_EARTH_RADIUS).to_degrees();
    let dlon = (de / (EQUATORIAL_EARTH_RADIUS * lon_scale)).to_degrees();

    GeoPoint::from_lon_lat_degrees( lon.degrees() + dlon, lat.degrees() + dlat)
}

/// linear velocity from the two newest samples: per-axis degrees-per-millisecond,
/// extended from the newest sample to `now`. Falls back to the newest position if
/// there is no second sample or the two share a timestamp (the velocity would be
/// undefined)
fn linear_velocity (s0: &TrackPoint, s1: Option<&TrackPoint>, now: EpochMillis)->GeoPoint {
    let Some(s1) = s1 else { return s0.pos };

    let dt = s0.date.millis_since( s1.date);
    if dt == 0 {
        return s0.pos
    }

    let lon0 = s0.pos.longitude().degrees();
    let lat0 = s0.pos.latitude().degrees();

    let v_lon = (lon0 - s1.pos.longitude().degrees()) / (dt as f64);
    let v_lat = (lat0 - s1.pos.latitude().degrees()) / (dt as f64);

    let elapsed = now.millis_since( s0.date) as f64;

    GeoPoint::from_lon_lat_degrees( lon0 + v_lon * elapsed, lat0 + v_lat * elapsed)
}
