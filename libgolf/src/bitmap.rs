/*  Copyright 2021-2026 the Golf Developers.
 *
 *  This file is part of libgolf.
 *
 *  libgolf is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  libgolf is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with libgolf.  If not, see <http://www.gnu.org/licenses/>. */

use std::collections::TryReserveError;
use std::ops::Index;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum BitOperation {
    Clear,
    Set,
    Toggle,
}

/// Dense membership map with one bit per linear position. Bits are packed most significant
/// bit first, so position 0 is bit 63 of word 0.
///
/// The map only reflects the live-cell set as of the last call to `sync`; it is not kept up
/// to date when the set changes afterwards.
#[derive(Debug, PartialEq, Clone)]
pub struct BitMap {
    words: Vec<u64>,
    len:   usize, // in bits
}

#[inline]
fn word_and_mask(position: usize) -> (usize, u64) {
    let word_idx = position / 64;
    let shift = 63 - (position & (64 - 1)); // bit index within the word
    (word_idx, 1 << shift)
}

impl BitMap {
    /// Creates a zero-initialized BitMap holding `len` bits.
    ///
    /// # Errors
    ///
    /// Fails if the backing words cannot be allocated.
    pub fn new(len: usize) -> Result<Self, TryReserveError> {
        let width_in_words = if len == 0 { 0 } else { (len - 1) / 64 + 1 };
        let mut words = Vec::new();
        words.try_reserve_exact(width_in_words)?;
        words.resize(width_in_words, 0);
        Ok(BitMap { words, len })
    }

    /// Number of bits (positions) covered.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn width_in_words(&self) -> usize {
        self.words.len()
    }

    /// Resets every bit, then sets the bit of each position in `live`.
    ///
    /// # Panics
    ///
    /// Panics if a position in `live` is out of range.
    pub fn sync<'a, I>(&mut self, live: I)
    where
        I: IntoIterator<Item = &'a usize>,
    {
        self.clear();
        for &position in live {
            self.modify(position, BitOperation::Set);
        }
    }

    /// Returns whether the bit for `position` is set.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range. Callers filter off-grid neighbors first.
    #[inline]
    pub fn get(&self, position: usize) -> bool {
        assert!(position < self.len, "position {} out of range {}", position, self.len);
        let (word_idx, mask) = word_and_mask(position);
        self.words[word_idx] & mask != 0
    }

    /// Sets, clears, or toggles the bit for `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[inline]
    pub fn modify(&mut self, position: usize, op: BitOperation) {
        assert!(position < self.len, "position {} out of range {}", position, self.len);
        let (word_idx, mask) = word_and_mask(position);
        match op {
            BitOperation::Set    => self.words[word_idx] |=  mask,
            BitOperation::Clear  => self.words[word_idx] &= !mask,
            BitOperation::Toggle => self.words[word_idx] ^=  mask,
        }
    }

    /// Clear this BitMap.
    pub fn clear(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Calls callback on each position whose bit is set, in ascending order.
    pub fn each_set<F: FnMut(usize)>(&self, mut callback: F) {
        for (word_idx, &word) in self.words.iter().enumerate() {
            let mut remaining = word;
            while remaining != 0 {
                let lead = remaining.leading_zeros() as usize;
                callback(word_idx * 64 + lead);
                remaining &= !(1 << (63 - lead));
            }
        }
    }
}

impl Index<usize> for BitMap {
    type Output = u64;

    fn index(&self, i: usize) -> &u64 {
        &self.words[i]
    }
}
