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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,FlightviewTrackError>;

#[derive(Error,Debug)]
pub enum FlightviewTrackError {

    #[error("feed JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("time parse error {0}")]
    TimeParseError( #[from] chrono::ParseError),

    #[error("render sink error {0}")]
    RenderError(String),

    #[error("animator channel closed")]
    ChannelClosed,

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] flightview_common::ron::RonConfigError),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

/// construct a RenderError from format args - mostly for use by RenderSink implementations
#[macro_export]
macro_rules! render_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::FlightviewTrackError::RenderError( format!( $fmt $(, $arg)* ))
    };
}
