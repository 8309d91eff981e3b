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

use chrono::{DateTime, TimeZone, Utc};
use serde::{Serialize,Deserialize,Deserializer};
use std::time::Duration;
use std::fmt;
use parse_duration::parse;

/// wall clock time as milliseconds since the unix epoch. This is our canonical track
/// timestamp representation - cheap to copy and to do arithmetic on
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis:i64)->Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64)->Self { EpochMillis(secs*1000) }

    pub fn millis (&self)->i64 { self.0 }

    /// signed difference in milliseconds (negative if `earlier` is in fact later)
    pub fn millis_since (&self, earlier: EpochMillis)->i64 { self.0 - earlier.0 }

    /// elapsed time since `earlier`, clamped to zero if `earlier` is later than self
    pub fn duration_since (&self, earlier: EpochMillis)->Duration {
        if self.0 >= earlier.0 {
            Duration::from_millis( (self.0 - earlier.0) as u64)
        } else {
            Duration::ZERO
        }
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateTime::<Utc>::from(*self))
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>)->Self { EpochMillis(date.timestamp_millis()) }
}

impl<Tz> From<EpochMillis> for DateTime<Tz> where Tz: TimeZone, DateTime<Tz>: From<DateTime<Utc>> {
    fn from (millis: EpochMillis)->Self {
        DateTime::<Utc>::from_timestamp_millis(millis.0).unwrap().into()
    }
}

impl PartialOrd for EpochMillis {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// the min,hour Duration ctors are still experimental so we provide our own wrappers
// for simple use cases that do not have to handle leap seconds and the like
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn secs_f64 (n: f64)->Duration { Duration::from_secs_f64(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }

//--- support for serde

/// deserialize a Duration from a human readable string such as "15min" or "1s 500ms"
pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}
