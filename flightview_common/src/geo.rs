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

/// this module provides support for geometries on the WGS84 ellipsoid surface.
/// We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate as the foundation and
/// employ the Rust [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html)
/// pattern to add value semantics the foundation crate does not have: normalized angles as
/// latitude/longitude and units-of-measure (via [uom](https://docs.rs/uom/latest/uom/)) for lengths

use std::fmt::{self,Debug,Display};

use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};
use serde::de::{self, Deserialize as DeserializeTrait, Deserializer, Visitor, SeqAccess, MapAccess};

use geo::{Bearing, Coord, CoordsIter, Distance, LineString, Point, Rect};
use geo::algorithm::line_measures::metric_spaces::Haversine;

use uom::si::f64::Length;
use uom::si::length::meter;

use crate::impl_deserialize_struct;
use crate::angle::{normalize_180, normalize_90, Angle360, Longitude, Latitude};

pub type GeoCoord = Coord<f64>;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn from_point (p:Point) -> Self { GeoPoint(p) }

    pub fn longitude (&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }

    pub fn coord (&self)->GeoCoord { self.0.0.clone() }

    /// initial great circle bearing from self towards other
    pub fn bearing_to (&self, other: &GeoPoint) -> Angle360 {
        Angle360::from_degrees( Haversine.bearing( self.0, other.0))
    }

    /// initial great circle bearing under which self is reached from other
    pub fn bearing_from (&self, other: &GeoPoint) -> Angle360 {
        other.bearing_to( self)
    }

    pub fn haversine_distance_to (&self, other: &GeoPoint) -> Length {
        let dist = Haversine.distance( self.0, other.0);
        Length::new::<meter>(dist)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

// we don't provide a From<Point<f64>> since that would allow to create a GeoPoint from arbitrary Points

impl SerializeTrait for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude().degrees())?;
        state.serialize_field("lat", &self.latitude().degrees())?;
        state.end()
    }
}

// note that we support alternative input formats for our virtual fields: "lon", "longitude" or "x" for longitude degrees
// and "lat", "latitude" or "y" for latitude degrees. This allows to directly deserialize from data that was
// serialized by `geo` types (which uses "x", "y"). This also means that we have to make sure the original source was
// using the same coordinate system.
impl_deserialize_struct!{ GeoPoint::from_lon_lat_degrees( lon | longitude | x, lat | latitude | y) }

/* #endregion GeoPoint */


/* #region GeoRect ***********************************************************************************************/

/// axis aligned geodetic bounding box, e.g. for map viewport extents
#[derive(Debug,Clone)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_min_max (sw: GeoPoint, ne: GeoPoint) -> Self {
        GeoRect( Rect::new( sw.coord(), ne.coord()))
    }

    pub fn from_wsen (west: Longitude, south: Latitude, east: Longitude, north: Latitude) -> Self {
        GeoRect( Rect::new( Point::new( west.degrees(), south.degrees()), Point::new( east.degrees(), north.degrees()) ))
    }

    pub fn contains (&self, p: &GeoPoint) -> bool {
        let c = p.coord();
        c.x >= self.0.min().x && c.x <= self.0.max().x && c.y >= self.0.min().y && c.y <= self.0.max().y
    }

    #[inline] pub fn west (&self)->Longitude { Longitude::from_degrees( self.0.min().x )}
    #[inline] pub fn east (&self)->Longitude { Longitude::from_degrees( self.0.max().x )}
    #[inline] pub fn south (&self)->Latitude { Latitude::from_degrees( self.0.min().y )}
    #[inline] pub fn north (&self)->Latitude { Latitude::from_degrees( self.0.max().y )}
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{};{},{}]", self.0.min().x, self.0.min().y, self.0.max().x, self.0.max().y)
    }
}

impl SerializeTrait for GeoRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoRect", 4)?;
        state.serialize_field("west", &self.west())?;
        state.serialize_field("south", &self.south())?;
        state.serialize_field("east", &self.east())?;
        state.serialize_field("north", &self.north())?;
        state.end()
    }
}

impl_deserialize_struct!{ GeoRect::from_wsen( west, south, east, north) }

/* #endregion GeoRect */


/* #region GeoLineString ***********************************************************************************************/

/// polyline in geodetic coordinates, e.g. the flight path geometry of a selected track
#[derive(Debug,Clone)]
pub struct GeoLineString(LineString);

impl GeoLineString {
    pub fn from_geo_points (ps: Vec<GeoPoint>) -> Self {
        let coords: Vec<GeoCoord> = ps.iter().map(|p| p.coord()).collect();
        GeoLineString( LineString::new(coords))
    }

    pub fn as_geo_points (&self)->Vec<GeoPoint> {
        self.0.points().map(|p| GeoPoint::from_point(p)).collect() // the inverse
    }

    pub fn coords_count (&self)->usize { self.0.coords_count() }
}

impl SerializeTrait for GeoLineString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoLineString", 1)?;
        state.serialize_field("points", &self.as_geo_points())?;
        state.end()
    }
}

impl_deserialize_struct!{ GeoLineString::from_geo_points( points) }

/* #endregion GeoLineString */
