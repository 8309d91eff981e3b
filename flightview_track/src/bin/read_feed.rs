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

use std::{fs, path::PathBuf};
use anyhow::Result;
use clap::Parser;
use flightview_track::feed::{parse_feed, track_updates_from};

#[derive(Parser)]
#[command(about="feed batch inspection tool - parse and normalize a feed JSON file")]
struct Args {
    /// also print the raw parsed records
    #[arg(long)]
    raw: bool,

    /// path of the feed JSON file
    path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let json = fs::read_to_string( &args.path)?;
    let records = parse_feed( &json)?;

    if args.raw {
        for rec in &records { println!("{:?}", rec); }
        println!();
    }

    let updates = track_updates_from( records);
    for update in &updates {
        println!("{update}");
    }
    println!("-- {} updates", updates.len());

    Ok(())
}
