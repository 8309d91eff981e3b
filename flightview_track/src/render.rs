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

//! the contract between the tracking core and the (external) map rendering surface.
//! The core never draws - it drives an abstract `RenderSink` that hands out opaque
//! per-entity display handles, and reports user interaction back through callbacks

use std::fmt;
use serde::{Serialize,Deserialize};
use flightview_common::{angle::Angle360, geo::{GeoLineString,GeoPoint,GeoRect}};

use crate::errors::Result;
use crate::info;

/// the map rendering surface the core renders tracks into. Implementations own all
/// actual drawing; the core only holds the opaque `Handle` a `create` returned until
/// it passes it back to `remove`. All calls are made synchronously from the single
/// animator task
pub trait RenderSink {
    type Handle;

    /// create the display representation for a new entity and return its handle
    fn create (&mut self, id: &str, pos: GeoPoint) -> Result<Self::Handle>;

    fn update_position (&mut self, handle: &mut Self::Handle, pos: GeoPoint) -> Result<()>;

    /// rotate the entity icon to its course
    fn set_heading (&mut self, handle: &mut Self::Handle, hdg: Angle360) -> Result<()>;

    /// switch the entity icon between its normal and selected states
    fn set_icon_state (&mut self, handle: &mut Self::Handle, selected: bool) -> Result<()>;

    /// set the trail (recent path) geometry shown for the entity
    fn set_trail_data (&mut self, handle: &mut Self::Handle, trail: &GeoLineString) -> Result<()>;

    /// release the display representation. This consumes the handle - there is no
    /// way to address the entity afterwards
    fn remove (&mut self, handle: Self::Handle) -> Result<()>;

    /// (re)configure a base map layer. Layer configs are passed through - the core
    /// does not interpret them beyond handing them to the display
    fn set_layer (&mut self, layer: &MapLayer) -> Result<()>;
}

/// a base map layer description, passed through to the render sink's source/layer
/// management. Typically deserialized from config files
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct MapLayer {
    pub name: String,
    pub source: String, // tile/style source URL or identifier
    pub vector: bool,   // vector tiles as opposed to raster
    pub display: bool,  // is the layer currently visible
    pub retina: bool,   // use 512px raster tiles instead of 256px
    pub default: bool,  // is this the initial layer
}

/// camera state as reported by the display after the user panned or zoomed
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct ViewChange {
    pub bounds: GeoRect,
    pub zoom: f64,
}

impl fmt::Display for ViewChange {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "ViewChange( bounds: {}, zoom: {:.1})", self.bounds, self.zoom)
    }
}

pub type TrackSelectedCallback = Box<dyn FnMut(&str) + Send>;
pub type ViewportChangedCallback = Box<dyn FnMut(&ViewChange) + Send>;

/// the application callbacks fired by the animator for user interaction the display
/// reports (marker clicks, camera moves). Both are optional
pub struct TrackViewCallbacks {
    pub on_track_selected: Option<TrackSelectedCallback>,
    pub on_viewport_changed: Option<ViewportChangedCallback>,
}

impl TrackViewCallbacks {
    pub fn none ()->Self {
        TrackViewCallbacks { on_track_selected: None, on_viewport_changed: None }
    }

    pub fn on_track_selected<F> (mut self, f: F)->Self where F: FnMut(&str) + Send + 'static {
        self.on_track_selected = Some( Box::new(f));
        self
    }

    pub fn on_viewport_changed<F> (mut self, f: F)->Self where F: FnMut(&ViewChange) + Send + 'static {
        self.on_viewport_changed = Some( Box::new(f));
        self
    }
}

impl Default for TrackViewCallbacks {
    fn default ()->Self { TrackViewCallbacks::none() }
}

/* #region console sink *******************************************************************************************/

/// a RenderSink that logs every call - used by the demo programs and handy for
/// debugging sink traffic of an embedding application
pub struct ConsoleSink {
    next_handle: usize,
    n_live: usize,
}

/// what the ConsoleSink hands out as display handle: just the entity id plus a
/// distinct number so that create/remove pairs can be matched in the log
#[derive(Debug)]
pub struct ConsoleHandle {
    pub id: String,
    pub num: usize,
}

impl ConsoleSink {
    pub fn new ()->Self { ConsoleSink { next_handle: 0, n_live: 0 } }

    /// number of currently live display handles
    pub fn n_live (&self)->usize { self.n_live }
}

impl RenderSink for ConsoleSink {
    type Handle = ConsoleHandle;

    fn create (&mut self, id: &str, pos: GeoPoint) -> Result<Self::Handle> {
        let num = self.next_handle;
        self.next_handle += 1;
        self.n_live += 1;
        info!( "sink: create #{} '{}' at {}", num, id, pos);
        Ok( ConsoleHandle { id: id.to_string(), num })
    }

    fn update_position (&mut self, handle: &mut Self::Handle, pos: GeoPoint) -> Result<()> {
        info!( "sink: position #{} '{}' -> {}", handle.num, handle.id, pos);
        Ok(())
    }

    fn set_heading (&mut self, handle: &mut Self::Handle, hdg: Angle360) -> Result<()> {
        info!( "sink: heading #{} '{}' -> {:.0}deg", handle.num, handle.id, hdg.degrees());
        Ok(())
    }

    fn set_icon_state (&mut self, handle: &mut Self::Handle, selected: bool) -> Result<()> {
        info!( "sink: icon #{} '{}' selected={}", handle.num, handle.id, selected);
        Ok(())
    }

    fn set_trail_data (&mut self, handle: &mut Self::Handle, trail: &GeoLineString) -> Result<()> {
        info!( "sink: trail #{} '{}' ({} points)", handle.num, handle.id, trail.coords_count());
        Ok(())
    }

    fn remove (&mut self, handle: Self::Handle) -> Result<()> {
        self.n_live -= 1;
        info!( "sink: remove #{} '{}'", handle.num, handle.id);
        Ok(())
    }

    fn set_layer (&mut self, layer: &MapLayer) -> Result<()> {
        info!( "sink: layer '{}' display={}", layer.name, layer.display);
        Ok(())
    }
}

/* #endregion console sink */
