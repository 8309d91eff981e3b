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

use std::collections::VecDeque;

/// make sure a VecDeque used as a newest-first ringbuffer can take one more element
/// without exceeding max_len. Evicts from the back, i.e. drops the oldest elements
#[inline]
pub fn ensure_ringbuffer_space<T> (v: &mut VecDeque<T>, max_len: usize) {
    // a degenerate max_len of 0 empties the deque and stops there
    while v.len() >= max_len && v.pop_back().is_some() {}
}

/// push a new element to the front of a VecDeque used as a newest-first ringbuffer of bounded size
#[inline]
pub fn push_to_ringbuffer<T> (v: &mut VecDeque<T>, t: T, max_len: usize) {
    ensure_ringbuffer_space(v, max_len);
    v.push_front(t)
}
