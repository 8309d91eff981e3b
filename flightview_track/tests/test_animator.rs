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

// run with "cargo test -p flightview_track --test test_animator -- --nocapture"

use std::sync::{Arc,Mutex};
use std::time::Duration;
use flightview_common::{angle::Angle360, datetime::{millis, EpochMillis}, geo::{GeoLineString,GeoPoint,GeoRect}, uom::knots};
use flightview_track::{
    animator::TrackAnimator,
    errors::Result,
    extrapolate::Extrapolation,
    render::{MapLayer, RenderSink, TrackViewCallbacks, ViewChange},
    TrackPoint, TrackUpdate, TrackViewConfig,
};

/* #region shared recording sink **********************************************************************************/

/// sink call recorder the test can inspect while the animator task owns the sink
#[derive(Clone)]
struct SharedSink {
    state: Arc<Mutex<SinkState>>,
}

struct SinkState {
    calls: Vec<String>,
    n_live: usize,
}

impl SharedSink {
    fn new () -> (Self, Arc<Mutex<SinkState>>) {
        let state = Arc::new( Mutex::new( SinkState { calls: Vec::new(), n_live: 0 }));
        (SharedSink { state: state.clone() }, state)
    }
}

fn n_calls (state: &Arc<Mutex<SinkState>>, prefix: &str) -> usize {
    state.lock().unwrap().calls.iter().filter( |c| c.starts_with( prefix)).count()
}

impl RenderSink for SharedSink {
    type Handle = String;

    fn create (&mut self, id: &str, pos: GeoPoint) -> Result<Self::Handle> {
        let mut state = self.state.lock().unwrap();
        state.calls.push( format!("create {}", id));
        state.n_live += 1;
        Ok( id.to_string())
    }
    fn update_position (&mut self, handle: &mut Self::Handle, pos: GeoPoint) -> Result<()> {
        self.state.lock().unwrap().calls.push( format!("position {} {}", handle, pos));
        Ok(())
    }
    fn set_heading (&mut self, handle: &mut Self::Handle, hdg: Angle360) -> Result<()> {
        self.state.lock().unwrap().calls.push( format!("heading {}", handle));
        Ok(())
    }
    fn set_icon_state (&mut self, handle: &mut Self::Handle, selected: bool) -> Result<()> {
        self.state.lock().unwrap().calls.push( format!("icon {} {}", handle, selected));
        Ok(())
    }
    fn set_trail_data (&mut self, handle: &mut Self::Handle, trail: &GeoLineString) -> Result<()> {
        self.state.lock().unwrap().calls.push( format!("trail {} {}", handle, trail.coords_count()));
        Ok(())
    }
    fn remove (&mut self, handle: Self::Handle) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push( format!("remove {}", handle));
        state.n_live -= 1;
        Ok(())
    }
    fn set_layer (&mut self, layer: &MapLayer) -> Result<()> {
        self.state.lock().unwrap().calls.push( format!("layer {}", layer.name));
        Ok(())
    }
}

/* #endregion shared recording sink */

/// a test config whose fallback interval stays out of the way so call counts are deterministic
fn quiet_config (extrapolation: Extrapolation) -> TrackViewConfig {
    TrackViewConfig { extrapolation, frame_interval: Duration::from_secs(3600), ..TrackViewConfig::default() }
}

fn moving_update (id: &str, age_millis: i64) -> TrackUpdate {
    TrackUpdate {
        id: id.to_string(),
        point: TrackPoint {
            pos: GeoPoint::from_lon_lat_degrees( -122.0, 37.0),
            date: EpochMillis::new( EpochMillis::now().millis() - age_millis),
            speed: Some( knots( 240.0)),
            hdg: Some( Angle360::from_degrees( 90.0)),
        }
    }
}

#[tokio::test]
async fn test_ingest_creates_markers () {
    let (sink, state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    animator.ingest( vec![ moving_update("A", 0), moving_update("B", 0) ]).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    assert_eq!( n_calls( &state, "create"), 2);
    assert_eq!( state.lock().unwrap().n_live, 2);

    animator.stop();
    animator.join().await;
}

#[tokio::test]
async fn test_frame_ticks_move_markers () {
    let (sink, state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    animator.ingest( vec![ moving_update("A", 5000) ]).await.unwrap(); // 5s old, 240kn due east
    tokio::time::sleep( millis(50)).await;
    let before = n_calls( &state, "position");

    animator.frame().unwrap();
    tokio::time::sleep( millis(50)).await;

    let after = n_calls( &state, "position");
    println!("position calls: {} -> {}", before, after);
    assert!( after > before); // the tick projected and pushed a moved position

    animator.stop();
    animator.join().await;
}

#[tokio::test]
async fn test_stop_is_idempotent_and_releases_handles () {
    let (sink, state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    animator.ingest( vec![ moving_update("A", 0), moving_update("B", 0) ]).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    animator.stop();
    animator.stop(); // idempotent
    animator.join().await;
    animator.join().await; // so is join

    assert!( !animator.is_running());
    assert_eq!( n_calls( &state, "remove"), 2);
    assert_eq!( state.lock().unwrap().n_live, 0); // every handle released exactly once
}

#[tokio::test]
async fn test_no_tick_after_stop () {
    let (sink, state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    animator.ingest( vec![ moving_update("A", 5000) ]).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    // the frame signal might still be queued when stop flips the flag - it must not tick
    animator.stop();
    let _ = animator.frame();
    animator.join().await;

    let calls = state.lock().unwrap().calls.clone();
    let first_remove = calls.iter().position( |c| c.starts_with("remove")).expect("no teardown remove");
    let last_position = calls.iter().rposition( |c| c.starts_with("position"));

    if let Some(last_position) = last_position {
        assert!( last_position < first_remove, "position pushed after stop: {:?}", calls);
    }

    // and nothing trickles in later either
    let n = calls.len();
    tokio::time::sleep( millis(100)).await;
    assert_eq!( state.lock().unwrap().calls.len(), n);
}

#[tokio::test]
async fn test_select_fires_callback_and_pushes_trail () {
    let selected: Arc<Mutex<Option<String>>> = Arc::new( Mutex::new( None));
    let selected2 = selected.clone();

    let (sink, state) = SharedSink::new();
    let callbacks = TrackViewCallbacks::none()
        .on_track_selected( move |id| { *selected2.lock().unwrap() = Some( id.to_string()); });

    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, callbacks);

    animator.ingest( vec![ moving_update("A", 0), moving_update("B", 0) ]).await.unwrap();
    animator.select( Some( "A".to_string())).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    assert_eq!( selected.lock().unwrap().as_deref(), Some("A"));
    assert_eq!( n_calls( &state, "icon A true"), 1);
    assert_eq!( n_calls( &state, "trail A"), 1);

    animator.stop();
    animator.join().await;
}

#[tokio::test]
async fn test_viewport_callback () {
    let zoom: Arc<Mutex<f64>> = Arc::new( Mutex::new( 0.0));
    let zoom2 = zoom.clone();

    let (sink, _state) = SharedSink::new();
    let callbacks = TrackViewCallbacks::none()
        .on_viewport_changed( move |view| { *zoom2.lock().unwrap() = view.zoom; });

    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, callbacks);

    let bounds = GeoRect::from_min_max(
        GeoPoint::from_lon_lat_degrees( -123.0, 36.0), GeoPoint::from_lon_lat_degrees( -121.0, 38.0));
    animator.viewport_changed( ViewChange { bounds, zoom: 9.5 }).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    assert_eq!( *zoom.lock().unwrap(), 9.5);

    animator.stop();
    animator.join().await;
}

#[tokio::test]
async fn test_set_layers_passthrough () {
    let (sink, state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    let layer = MapLayer {
        name: "osm".to_string(), source: "https://tile.example/{z}/{x}/{y}.png".to_string(),
        vector: false, display: true, retina: true, default: true,
    };
    animator.set_layers( vec![ layer ]).await.unwrap();
    tokio::time::sleep( millis(50)).await;

    assert_eq!( n_calls( &state, "layer osm"), 1);

    animator.stop();
    animator.join().await;
}

#[tokio::test]
async fn test_sends_after_shutdown_error () {
    let (sink, _state) = SharedSink::new();
    let animator = TrackAnimator::spawn( quiet_config( Extrapolation::DeadReckoning), sink, TrackViewCallbacks::none());

    animator.stop();
    animator.join().await;

    assert!( animator.ingest( vec![ moving_update("A", 0) ]).await.is_err());
    assert!( animator.frame().is_err());
}
