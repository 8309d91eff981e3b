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

//! trail geometry for selected tracks

use flightview_common::geo::{GeoLineString,GeoPoint};

use crate::Track;

/// the path geometry shown for a selected track: its current (extrapolated) position
/// first, followed by the historical positions newest to oldest, capped at the track's
/// history capacity. Pure - rendering it is the sink's business
pub fn track_trail<H> (track: &Track<H>)->GeoLineString {
    let max_points = track.max_points();
    let mut points: Vec<GeoPoint> = Vec::with_capacity( max_points);

    points.push( track.current);
    points.extend( track.points.iter().take( max_points.saturating_sub(1)).map( |p| p.pos));

    GeoLineString::from_geo_points( points)
}
