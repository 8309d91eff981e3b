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

//! common primitives shared by the flightview crates: normalized angles, geodetic
//! geometry wrappers, epoch-millisecond timestamps, ringbuffer helpers and RON
//! config loading

pub mod macros;
pub mod collections;
pub mod datetime;
pub mod angle;
pub mod geo_constants;
pub mod geo;
pub mod uom;
pub mod ron;
