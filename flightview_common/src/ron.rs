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

//! RON config file support. Configs are loaded from explicit filesystem paths so that
//! callers (bins, examples, tests) stay in control of where their settings come from

use std::{fs, path::Path};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RonConfigError>;

#[derive(Error,Debug)]
pub enum RonConfigError {
    #[error("config IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

/// load a RON encoded config struct of type C from the given path
pub fn load_ron_config<C: DeserializeOwned, P: AsRef<Path>> (path: P) -> Result<C> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
