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

//! the animation scheduler: a single tokio task that owns store, sink and config and
//! serializes all mutation through one message loop. Batch reconciliation and
//! animation ticks therefore never partially interleave, and no locking is needed
//! anywhere in the core.
//!
//! Ticks are normally driven by render-synchronized `Frame` signals from the display;
//! a fallback interval (reset on every processed frame) guarantees forward progress
//! when those stall. Stopping is explicit, idempotent and raceproof - once `stop()`
//! was called no queued message can cause another sink call, and loop exit releases
//! every outstanding display handle through the regular removal path

use std::sync::{Arc, atomic::{AtomicBool,Ordering}};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use flightview_common::datetime::EpochMillis;

use crate::errors::{FlightviewTrackError,Result};
use crate::render::{MapLayer,RenderSink,TrackViewCallbacks,ViewChange};
use crate::{TrackStore,TrackUpdate,TrackViewConfig};
use crate::{debug,info,warn};

#[derive(Debug)]
pub enum TrackAnimatorMsg {
    Ingest(Vec<TrackUpdate>),     // reconcile a report batch
    Frame,                        // render-synchronized tick signal
    Select(Option<String>),       // selection change reported by the display
    Viewport(ViewChange),         // camera change reported by the display
    SetLayers(Vec<MapLayer>),     // (re)configure base map layers
    Stop,
}

pub struct TrackAnimator<S> where S: RenderSink {
    config: TrackViewConfig,
    store: TrackStore<S::Handle>,
    sink: S,
    callbacks: TrackViewCallbacks,
}

impl<S> TrackAnimator<S>
    where S: RenderSink + Send + 'static, S::Handle: Send + 'static
{
    /// spawn the animator task and return the handle to talk to it
    pub fn spawn (config: TrackViewConfig, sink: S, callbacks: TrackViewCallbacks)->AnimatorHandle {
        let (tx, rx) = mpsc::channel( 64);
        let running = Arc::new( AtomicBool::new(true));

        let animator = TrackAnimator {
            store: TrackStore::new( config.max_track_points),
            config, sink, callbacks,
        };

        let task = tokio::spawn( animator.run( rx, running.clone()));
        AnimatorHandle { tx, running, task: Arc::new( Mutex::new( Some(task))) }
    }

    async fn run (mut self, mut rx: mpsc::Receiver<TrackAnimatorMsg>, running: Arc<AtomicBool>) {
        let mut fallback = interval( self.config.frame_interval);
        fallback.set_missed_tick_behavior( MissedTickBehavior::Delay);
        fallback.reset(); // otherwise the first tick fires immediately

        loop {
            if !running.load( Ordering::Acquire) { break }

            tokio::select! {
                maybe_msg = rx.recv() => {
                    let Some(msg) = maybe_msg else { break }; // all senders gone
                    if !running.load( Ordering::Acquire) { break } // stop raced a queued message - don't process it

                    match msg {
                        TrackAnimatorMsg::Ingest(batch) => {
                            self.store.reconcile( &batch, &mut self.sink);
                        }
                        TrackAnimatorMsg::Frame => {
                            self.animation_tick();
                            fallback.reset(); // frames are coming in, hold the fallback off
                        }
                        TrackAnimatorMsg::Select(id) => {
                            self.store.select( id.as_deref(), &mut self.sink);
                            if let Some(id) = &id {
                                if let Some(cb) = &mut self.callbacks.on_track_selected { cb( id) }
                            }
                        }
                        TrackAnimatorMsg::Viewport(view) => {
                            if let Some(cb) = &mut self.callbacks.on_viewport_changed { cb( &view) }
                        }
                        TrackAnimatorMsg::SetLayers(layers) => {
                            for layer in &layers {
                                if let Err(e) = self.sink.set_layer( layer) {
                                    warn!( "failed to set layer '{}': {}", layer.name, e);
                                }
                            }
                        }
                        TrackAnimatorMsg::Stop => break,
                    }
                }
                _ = fallback.tick() => { // frame signals stalled
                    self.animation_tick();
                }
            }
        }

        running.store( false, Ordering::Release);

        let n = self.store.clear( &mut self.sink);
        info!( "animator stopped, released {} display handles", n);
    }

    /// one animation pass: project every non-stale track to "now" and push positions
    /// that actually moved. Stale tracks stay frozen (and in the store) until the
    /// feed stops reporting them
    fn animation_tick (&mut self) {
        let now = EpochMillis::now();
        let model = self.config.extrapolation;
        let max_age = self.config.max_sample_age;

        for track in self.store.tracks_mut() {
            if track.is_stale( now, max_age) { continue }

            let pos = model.project( track, now, max_age);
            if pos != track.current {
                track.current = pos;
                if let Err(e) = self.sink.update_position( &mut track.handle, pos) {
                    warn!( "failed to update position for '{}': {}", track.id, e);
                }
            }
        }
    }
}

/// the cheap-to-clone handle an embedding application uses to feed and control a
/// spawned TrackAnimator
#[derive(Clone)]
pub struct AnimatorHandle {
    tx: mpsc::Sender<TrackAnimatorMsg>,
    running: Arc<AtomicBool>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AnimatorHandle {

    /// hand a normalized report batch to the animator for reconciliation
    pub async fn ingest (&self, updates: Vec<TrackUpdate>)->Result<()> {
        self.send( TrackAnimatorMsg::Ingest( updates)).await
    }

    /// report a selection change (e.g. a marker click) from the display
    pub async fn select (&self, id: Option<String>)->Result<()> {
        self.send( TrackAnimatorMsg::Select( id)).await
    }

    /// report a camera change from the display
    pub async fn viewport_changed (&self, view: ViewChange)->Result<()> {
        self.send( TrackAnimatorMsg::Viewport( view)).await
    }

    pub async fn set_layers (&self, layers: Vec<MapLayer>)->Result<()> {
        self.send( TrackAnimatorMsg::SetLayers( layers)).await
    }

    /// render-synchronized tick signal. Never blocks - if the channel is full a tick
    /// is already pending and this one can be coalesced into it
    pub fn frame (&self)->Result<()> {
        match self.tx.try_send( TrackAnimatorMsg::Frame) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Ok(()),
            Err(mpsc::error::TrySendError::Closed(_)) => Err( FlightviewTrackError::ChannelClosed),
        }
    }

    /// stop the animator. Idempotent, and safe against queued messages: the flag is
    /// flipped before the wakeup so nothing queued can still cause sink calls
    pub fn stop (&self) {
        self.running.store( false, Ordering::Release);
        let _ = self.tx.try_send( TrackAnimatorMsg::Stop); // best-effort wakeup
    }

    pub fn is_running (&self)->bool {
        self.running.load( Ordering::Acquire)
    }

    /// wait for the animator task to terminate (all display handles are released when
    /// this returns)
    pub async fn join (&self) {
        let task = self.task.lock().await.take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }

    async fn send (&self, msg: TrackAnimatorMsg)->Result<()> {
        self.tx.send( msg).await.map_err( |_| FlightviewTrackError::ChannelClosed)
    }
}
