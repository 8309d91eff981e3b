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

//! the flightview tracking core: live vehicle tracks fed from periodic position report
//! batches, reconciled against an abstract render sink and animated between batches
//! by position extrapolation

use std::{collections::{HashMap,VecDeque}, fmt, sync::Arc, time::Duration};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Velocity, velocity::knot};
use flightview_common::{
    angle::Angle360,
    collections::push_to_ringbuffer,
    datetime::{deserialize_duration, minutes, secs, EpochMillis},
    geo::GeoPoint,
};

pub mod errors;
use errors::{FlightviewTrackError,Result};

pub mod feed;
pub mod extrapolate;
use extrapolate::Extrapolation;

pub mod reconcile;
pub mod trail;
pub mod render;
pub mod animator;

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $( $id:ident = $e:expr ),* ) => { tracing::trace!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::trace!( $( $e ),* ) }
}

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::error!( $( $e ),* ) }
}

/* #region config *************************************************************************************************/

/// the settings for track animation. Note that duration fields are deserialized
/// from human readable strings such as "15min"
#[derive(Deserialize,Debug,Clone)]
pub struct TrackViewConfig {
    #[serde(default = "default_extrapolation")]
    pub extrapolation: Extrapolation, // which projection model the animator uses between batches

    #[serde(default = "default_max_track_points")]
    pub max_track_points: usize, // max number of history points kept per track

    #[serde(default = "default_max_sample_age", deserialize_with = "deserialize_duration")]
    pub max_sample_age: Duration, // cutoff beyond which tracks are frozen instead of extrapolated

    #[serde(default = "default_frame_interval", deserialize_with = "deserialize_duration")]
    pub frame_interval: Duration, // fallback tick interval if no frame signals arrive
}

fn default_extrapolation ()->Extrapolation { Extrapolation::LinearVelocity }
fn default_max_track_points ()->usize { 10 }
fn default_max_sample_age ()->Duration { minutes(15) }
fn default_frame_interval ()->Duration { secs(1) }

impl Default for TrackViewConfig {
    fn default ()->Self {
        TrackViewConfig {
            extrapolation: default_extrapolation(),
            max_track_points: default_max_track_points(),
            max_sample_age: default_max_sample_age(),
            frame_interval: default_frame_interval(),
        }
    }
}

/* #endregion config */

/* #region track data model ***************************************************************************************/

/// one timestamped position report for a tracked entity. Immutable once recorded
#[derive(Debug,Clone,PartialEq)]
pub struct TrackPoint {
    pub pos: GeoPoint,
    pub date: EpochMillis,
    pub speed: Option<Velocity>, // ground speed, fed in knots
    pub hdg: Option<Angle360>,   // course over ground, degrees clockwise from north
}

impl fmt::Display for TrackPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "TrackPoint( pos: {}, time: {}", self.pos, self.date);
        if let Some(spd) = self.speed { write!( f, ", spd: {:.1}", spd.get::<knot>()); }
        if let Some(hdg) = self.hdg { write!( f, ", hdg: {:.0}", hdg.degrees()); }
        write!( f, ")")
    }
}

/// a normalized position report as produced by the feed module and consumed by reconciliation
#[derive(Debug,Clone)]
pub struct TrackUpdate {
    pub id: String,
    pub point: TrackPoint,
}

impl fmt::Display for TrackUpdate {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "TrackUpdate( id: {}, point: {})", self.id, self.point)
    }
}

/// the data model for one tracked entity: its bounded sample history (newest first),
/// the derived current (extrapolated) position and the display handle it exclusively
/// owns for its lifetime. Domain state never looks into the handle - it is obtained
/// from and released back to the render sink
#[derive(Debug)]
pub struct Track<H> {
    pub id: Arc<String>, // we keep that in an Arc so that we can clone without heap allocation
    pub points: VecDeque<TrackPoint>, // used as a newest-first ringbuffer
    pub current: GeoPoint, // recomputed by animation ticks, not by ingestion
    pub selected: bool,
    pub handle: H,

    max_points: usize,
}

impl<H> Track<H> {
    pub fn new (id: String, point: TrackPoint, handle: H, max_points: usize)->Self {
        let current = point.pos;
        let mut points = VecDeque::with_capacity( max_points);
        points.push_front( point);

        Track { id: Arc::new(id), points, current, selected: false, handle, max_points }
    }

    /// the most recent sample. Tracks are never empty so this cannot fail
    pub fn newest (&self)->&TrackPoint { &self.points[0] }

    pub fn max_points (&self)->usize { self.max_points }

    /// prepend a new sample, evicting the oldest beyond capacity
    pub fn push_point (&mut self, point: TrackPoint) {
        push_to_ringbuffer( &mut self.points, point, self.max_points);
    }

    /// replace the newest sample in place (same-timestamp updates)
    pub fn replace_newest (&mut self, point: TrackPoint) {
        self.points[0] = point;
    }

    pub fn is_stale (&self, now: EpochMillis, max_sample_age: Duration)->bool {
        now.duration_since( self.newest().date) > max_sample_age
    }
}

impl<H> fmt::Display for Track<H> {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Track( id: {}, n_points: {}, current: {}", self.id, self.points.len(), self.current);
        if self.selected { write!( f, ", selected"); }
        write!( f, ", time: {})", self.newest().date)
    }
}

/// the id-indexed collection of live tracks plus the current selection. Exclusively
/// owned and mutated by the animator task - no locking required
pub struct TrackStore<H> {
    tracks: HashMap<String,Track<H>>,
    selected_id: Option<String>,
    max_track_points: usize,
}

impl<H> TrackStore<H> {
    pub fn new (max_track_points: usize)->Self {
        TrackStore { tracks: HashMap::new(), selected_id: None, max_track_points }
    }

    pub fn len (&self)->usize { self.tracks.len() }
    pub fn is_empty (&self)->bool { self.tracks.is_empty() }

    pub fn contains (&self, id: &str)->bool { self.tracks.contains_key(id) }
    pub fn get (&self, id: &str)->Option<&Track<H>> { self.tracks.get(id) }
    pub fn get_mut (&mut self, id: &str)->Option<&mut Track<H>> { self.tracks.get_mut(id) }

    pub fn tracks (&self)->impl Iterator<Item=&Track<H>> { self.tracks.values() }
    pub fn tracks_mut (&mut self)->impl Iterator<Item=&mut Track<H>> { self.tracks.values_mut() }

    pub fn selected_id (&self)->Option<&str> { self.selected_id.as_deref() }

    pub fn max_track_points (&self)->usize { self.max_track_points }

    pub (crate) fn tracks_map_mut (&mut self)->&mut HashMap<String,Track<H>> { &mut self.tracks }
    pub (crate) fn set_selected_id (&mut self, id: Option<String>) { self.selected_id = id; }
}

/* #endregion track data model */
