//! Recovering counters from decrypted points. A counter `v` is encrypted as `v * G` and only small
//! counters are ever encrypted, so the discrete log is found by looking the point up among
//! `G, 2 * G, ..., max * G`.

use crate::error::SketchError;
use any_sketch_utils::ec::CompressedPoint;
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::{collections::BTreeMap, end_timer, marker::PhantomData, start_timer, vec::Vec, Zero};

/// Largest `max_counter_value` a decoder builds a table for. Each entry holds an encoded point.
pub const MAX_COUNTER_TABLE_SIZE: u64 = 1 << 20;

/// Lookup table from encoded multiples of the generator to counters
#[derive(Clone, Debug)]
pub struct CounterDecoder<G: AffineRepr + CompressedPoint> {
    max_counter_value: u64,
    table: BTreeMap<Vec<u8>, u64>,
    _group: PhantomData<G>,
}

impl<G: AffineRepr + CompressedPoint> CounterDecoder<G> {
    /// Builds the table of `v * G` for `v` in `1..=max_counter_value`. The identity, counter 0, has no
    /// encoding and is handled without the table. Fails for bounds above [`MAX_COUNTER_TABLE_SIZE`].
    pub fn new(max_counter_value: u64) -> Result<Self, SketchError> {
        if max_counter_value > MAX_COUNTER_TABLE_SIZE {
            return Err(SketchError::CounterTableTooLarge(
                max_counter_value,
                MAX_COUNTER_TABLE_SIZE,
            ));
        }
        let table_time = start_timer!(|| "Build counter table");
        let mut multiples = Vec::with_capacity(max_counter_value as usize);
        let mut current = G::Group::zero();
        let gen = G::generator();
        for _ in 0..max_counter_value {
            current += gen;
            multiples.push(current);
        }
        let mut table = BTreeMap::new();
        for (i, point) in G::Group::normalize_batch(&multiples).into_iter().enumerate() {
            table.insert(point.to_compressed()?, i as u64 + 1);
        }
        end_timer!(table_time);
        Ok(Self {
            max_counter_value,
            table,
            _group: PhantomData,
        })
    }

    pub fn max_counter_value(&self) -> u64 {
        self.max_counter_value
    }

    pub fn decode(&self, point: &G) -> Result<u64, SketchError> {
        if point.is_zero() {
            return Ok(0);
        }
        self.decode_bytes(&point.to_compressed()?)
    }

    /// Counter of an encoded point
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<u64, SketchError> {
        self.table
            .get(bytes)
            .copied()
            .ok_or(SketchError::CounterOutOfRange)
    }
}
