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

//! run a TrackAnimator over a ConsoleSink with a scripted set of report batches
//! (create / churn / remove), frame signals and a selection, logging every sink call.
//! Run with `RUST_LOG=debug cargo run --example console_tracks`

#![allow(unused)]

use anyhow::Result;
use rand::Rng;
use flightview_common::{angle::Angle360, datetime::{secs, EpochMillis}, geo::GeoPoint, ron::load_ron_config, uom::knots};
use flightview_track::{
    animator::TrackAnimator,
    render::{ConsoleSink, TrackViewCallbacks},
    TrackPoint, TrackUpdate, TrackViewConfig,
};

const CONFIG_PATH: &'static str = "flightview_track/configs/trackview.ron";

fn update (id: &str, lon: f64, lat: f64, speed_kn: f64, hdg_deg: f64) -> TrackUpdate {
    let mut rng = rand::rng();
    let jitter: f64 = rng.random_range( -0.0005..0.0005); // a little synthetic scatter

    TrackUpdate {
        id: id.to_string(),
        point: TrackPoint {
            pos: GeoPoint::from_lon_lat_degrees( lon + jitter, lat + jitter),
            date: EpochMillis::now(),
            speed: Some( knots( speed_kn)),
            hdg: Some( Angle360::from_degrees( hdg_deg)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config: TrackViewConfig = load_ron_config( CONFIG_PATH).unwrap_or_else( |e| {
        println!("no config at {CONFIG_PATH} ({e}), using defaults");
        TrackViewConfig::default()
    });

    let callbacks = TrackViewCallbacks::none()
        .on_track_selected( |id| println!(">> selected '{id}'"))
        .on_viewport_changed( |view| println!(">> viewport {view}"));

    let animator = TrackAnimator::spawn( config, ConsoleSink::new(), callbacks);

    println!("--- batch 1: create N700AB, N701CD");
    animator.ingest( vec![
        update( "N700AB", -122.04, 37.17, 240.0, 85.0),
        update( "N701CD", -122.10, 37.25, 180.0, 190.0),
    ]).await?;

    for _ in 0..3 {
        tokio::time::sleep( secs(1)).await;
        animator.frame()?;
    }

    println!("--- select N701CD");
    animator.select( Some( "N701CD".to_string())).await?;

    println!("--- batch 2: churn - N700AB gone, N702EF new");
    animator.ingest( vec![
        update( "N701CD", -122.11, 37.22, 185.0, 188.0),
        update( "N702EF", -121.95, 37.30, 320.0, 270.0),
    ]).await?;

    for _ in 0..3 {
        tokio::time::sleep( secs(1)).await;
        animator.frame()?;
    }

    println!("--- empty batch: remove everything");
    animator.ingest( Vec::new()).await?;

    println!("--- stop");
    animator.stop();
    animator.join().await;

    Ok(())
}
