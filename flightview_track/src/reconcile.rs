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

//! reconciliation of report batches against the live track store. This is where the
//! exactly-once display lifecycle is enforced: one `create` per entity appearance, one
//! `remove` per disappearance, no matter how batches interleave. Sink failures are
//! confined to the affected entity - the batch always runs to completion.
//!
//! Duplicate ids within one batch are processed in order, i.e. the last occurrence
//! wins (the first creates the track, later ones take the update path). Out-of-order
//! samples are dropped; a same-timestamp sample replaces the newest in place, and if
//! payload-identical is a complete no-op - which makes re-reconciling an identical
//! batch silent with respect to the sink

use std::collections::{hash_map::Entry, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::{Track,TrackPoint,TrackStore,TrackUpdate};
use crate::render::RenderSink;
use crate::trail::track_trail;
use crate::{debug,warn};

/// the elements of `left` whose key does not occur in `right`. A standalone pure
/// function so that callers are not tied to any particular collection type
pub fn diff_by_key<L,R,K,FL,FR> (left: impl IntoIterator<Item=L>, right: impl IntoIterator<Item=R>, lkey: FL, rkey: FR)->Vec<L>
    where K: Eq + Hash, FL: Fn(&L)->K, FR: Fn(&R)->K
{
    let right_keys: HashSet<K> = right.into_iter().map( |r| rkey(&r)).collect();
    left.into_iter().filter( |l| !right_keys.contains( &lkey(l))).collect()
}

/// what a reconcile pass did, for logging and tests
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub removed: usize,
}

impl fmt::Display for ReconcileStats {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "ReconcileStats( created: {}, updated: {}, unchanged: {}, removed: {})",
                self.created, self.updated, self.unchanged, self.removed)
    }
}

impl<H> TrackStore<H> {

    /// drive store and sink from one report batch: update known entities, create
    /// display state for new ones and remove everything the batch no longer mentions
    pub fn reconcile<S> (&mut self, batch: &[TrackUpdate], sink: &mut S)->ReconcileStats
        where S: RenderSink<Handle=H>
    {
        let mut stats = ReconcileStats::default();
        let max_track_points = self.max_track_points();

        for update in batch {
            match self.tracks_map_mut().entry( update.id.clone()) {
                Entry::Occupied(mut entry) => update_track( entry.get_mut(), update, sink, &mut stats),
                Entry::Vacant(entry) => {
                    match sink.create( &update.id, update.point.pos) {
                        Ok(mut handle) => {
                            if let Some(hdg) = update.point.hdg {
                                if let Err(e) = sink.set_heading( &mut handle, hdg) {
                                    warn!( "failed to set initial heading for '{}': {}", update.id, e);
                                }
                            }
                            entry.insert( Track::new( update.id.clone(), update.point.clone(), handle, max_track_points));
                            stats.created += 1;
                        }
                        Err(e) => { // fatal for this entity only - the next batch gets another chance
                            warn!( "failed to create display state for '{}': {}", update.id, e);
                        }
                    }
                }
            }
        }

        let dropped = diff_by_key( self.tracks().map( |t| t.id.as_ref().clone()), batch.iter(),
                                   |id: &String| id.clone(), |u| u.id.clone());
        for id in dropped {
            if self.selected_id() == Some( id.as_str()) {
                self.set_selected_id( None);
            }
            if let Some(track) = self.tracks_map_mut().remove( &id) {
                if let Err(e) = sink.remove( track.handle) {
                    warn!( "failed to remove display state for '{}': {}", id, e);
                }
                stats.removed += 1;
            }
        }

        debug!( "reconciled batch of {}: {}", batch.len(), stats);
        stats
    }

    /// change the selection. Selecting an unknown id or `None` just clears the
    /// current selection. Sink failures are logged but never poison store state
    pub fn select<S> (&mut self, id: Option<&str>, sink: &mut S)
        where S: RenderSink<Handle=H>
    {
        if let Some(prev_id) = self.selected_id().map( |s| s.to_string()) {
            self.set_selected_id( None);
            if let Some(track) = self.get_mut( &prev_id) {
                track.selected = false;
                if let Err(e) = sink.set_icon_state( &mut track.handle, false) {
                    warn!( "failed to reset icon state for '{}': {}", prev_id, e);
                }
            }
        }

        if let Some(id) = id {
            if let Some(track) = self.get_mut( id) {
                track.selected = true;
                if let Err(e) = sink.set_icon_state( &mut track.handle, true) {
                    warn!( "failed to set icon state for '{}': {}", id, e);
                }
                let trail = track_trail( track);
                if let Err(e) = sink.set_trail_data( &mut track.handle, &trail) {
                    warn!( "failed to set trail data for '{}': {}", id, e);
                }
                self.set_selected_id( Some( id.to_string()));
            }
        }
    }

    /// remove all tracks, releasing every display handle. This is the teardown path
    /// the animator runs on shutdown
    pub fn clear<S> (&mut self, sink: &mut S)->usize
        where S: RenderSink<Handle=H>
    {
        self.set_selected_id( None);

        let tracks = self.tracks_map_mut();
        let n = tracks.len();
        for (id, track) in tracks.drain() {
            if let Err(e) = sink.remove( track.handle) {
                warn!( "failed to remove display state for '{}': {}", id, e);
            }
        }
        n
    }
}

fn update_track<H,S> (track: &mut Track<H>, update: &TrackUpdate, sink: &mut S, stats: &mut ReconcileStats)
    where S: RenderSink<Handle=H>
{
    let prev = track.newest().clone();
    let dt = update.point.date.millis_since( prev.date);

    if dt < 0 { // out-of-order delivery, we already have something newer
        stats.unchanged += 1;
        return
    }

    let point = fill_velocity( &update.point, &prev);

    if dt == 0 {
        if point == prev { // re-delivery of the newest sample
            stats.unchanged += 1;
            return
        }
        track.replace_newest( point);
    } else {
        track.push_point( point);
    }

    let newest = track.newest().clone();
    track.current = newest.pos;

    if let Err(e) = sink.update_position( &mut track.handle, newest.pos) {
        warn!( "failed to update position for '{}': {}", update.id, e);
    }
    if let Some(hdg) = newest.hdg {
        if let Err(e) = sink.set_heading( &mut track.handle, hdg) {
            warn!( "failed to update heading for '{}': {}", update.id, e);
        }
    }
    if track.selected {
        let trail = track_trail( track);
        if let Err(e) = sink.set_trail_data( &mut track.handle, &trail) {
            warn!( "failed to update trail for '{}': {}", update.id, e);
        }
    }

    stats.updated += 1;
}

/// sticky velocity: a sample that lacks speed inherits the previous newest sample's
/// speed, a sample that lacks heading gets the travel bearing from the previous
/// position (or inherits, if the position did not change)
fn fill_velocity (point: &TrackPoint, prev: &TrackPoint)->TrackPoint {
    let speed = point.speed.or( prev.speed);
    let hdg = point.hdg.or_else( || {
        if point.pos != prev.pos { Some( prev.pos.bearing_to( &point.pos)) } else { prev.hdg }
    });

    TrackPoint { pos: point.pos, date: point.date, speed, hdg }
}
