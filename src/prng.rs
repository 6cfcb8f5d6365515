//! A small seedable xorshift generator.
//!
//! Marsaglia's 32 bit xorshift: three shift-xor steps over one state word. The shift amounts come
//! from the 81 full period triples listed in "Xorshift RNGs" (2003). Given the same seed and table
//! index the output sequence is the same on every platform.

use log::warn;
use rand_core::{impls, Error, RngCore, SeedableRng};

/// Shift amounts `(a, b, c)` for `x ^= x << a; x ^= x >> b; x ^= x << c`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ShiftTriple(pub u32, pub u32, pub u32);

pub const XORSHIFT_TRIPLES: [ShiftTriple; 81] = [
    ShiftTriple(1, 3, 10), ShiftTriple(1, 5, 16), ShiftTriple(1, 5, 19),
    ShiftTriple(1, 9, 29), ShiftTriple(1, 11, 6), ShiftTriple(1, 11, 16),
    ShiftTriple(1, 19, 3), ShiftTriple(1, 21, 20), ShiftTriple(1, 27, 27),
    ShiftTriple(2, 5, 15), ShiftTriple(2, 5, 21), ShiftTriple(2, 7, 7),
    ShiftTriple(2, 7, 9), ShiftTriple(2, 7, 25), ShiftTriple(2, 9, 15),
    ShiftTriple(2, 15, 17), ShiftTriple(2, 15, 25), ShiftTriple(2, 21, 9),
    ShiftTriple(3, 1, 14), ShiftTriple(3, 3, 26), ShiftTriple(3, 3, 28),
    ShiftTriple(3, 3, 29), ShiftTriple(3, 5, 20), ShiftTriple(3, 5, 22),
    ShiftTriple(3, 5, 25), ShiftTriple(3, 7, 29), ShiftTriple(3, 13, 7),
    ShiftTriple(3, 23, 25), ShiftTriple(3, 25, 24), ShiftTriple(3, 27, 11),
    ShiftTriple(4, 3, 17), ShiftTriple(4, 3, 27), ShiftTriple(4, 5, 15),
    ShiftTriple(5, 3, 21), ShiftTriple(5, 7, 22), ShiftTriple(5, 9, 7),
    ShiftTriple(5, 9, 28), ShiftTriple(5, 9, 31), ShiftTriple(5, 13, 6),
    ShiftTriple(5, 15, 17), ShiftTriple(5, 17, 13), ShiftTriple(5, 21, 12),
    ShiftTriple(5, 27, 8), ShiftTriple(5, 27, 21), ShiftTriple(5, 27, 25),
    ShiftTriple(5, 27, 28), ShiftTriple(6, 1, 11), ShiftTriple(6, 3, 17),
    ShiftTriple(6, 17, 9), ShiftTriple(6, 21, 7), ShiftTriple(6, 21, 13),
    ShiftTriple(7, 1, 9), ShiftTriple(7, 1, 18), ShiftTriple(7, 1, 25),
    ShiftTriple(7, 13, 25), ShiftTriple(7, 17, 21), ShiftTriple(7, 25, 12),
    ShiftTriple(7, 25, 20), ShiftTriple(8, 7, 23), ShiftTriple(8, 9, 23),
    ShiftTriple(9, 5, 1), ShiftTriple(9, 5, 25), ShiftTriple(9, 11, 19),
    ShiftTriple(9, 21, 16), ShiftTriple(10, 9, 21), ShiftTriple(10, 9, 25),
    ShiftTriple(11, 7, 12), ShiftTriple(11, 7, 16), ShiftTriple(11, 17, 13),
    ShiftTriple(11, 21, 13), ShiftTriple(12, 9, 23), ShiftTriple(13, 3, 17),
    ShiftTriple(13, 3, 27), ShiftTriple(13, 5, 19), ShiftTriple(13, 17, 15),
    ShiftTriple(14, 1, 15), ShiftTriple(14, 13, 15), ShiftTriple(15, 1, 29),
    ShiftTriple(17, 15, 20), ShiftTriple(17, 15, 23), ShiftTriple(17, 15, 26),
];

/// Replaces a zero seed; zero is a fixed point of every xorshift.
pub const DEFAULT_STATE: u32 = 2_463_534_242;

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct XorShift32 {
    shifts: ShiftTriple,
    parameter_index: usize,
    state: u32,
}

impl XorShift32 {
    /// `parameter_index` is reduced modulo the table size, negative indices wrap from the end.
    pub fn new(seed: u32, parameter_index: isize) -> XorShift32 {
        let parameter_index = parameter_index.rem_euclid(XORSHIFT_TRIPLES.len() as isize) as usize;
        let state = if seed == 0 {
            warn!("Zero xorshift seed replaced with {}", DEFAULT_STATE);
            DEFAULT_STATE
        } else {
            seed
        };

        XorShift32 {
            shifts: XORSHIFT_TRIPLES[parameter_index],
            parameter_index,
            state,
        }
    }

    #[inline]
    pub fn shifts(&self) -> ShiftTriple {
        self.shifts
    }

    #[inline]
    pub fn parameter_index(&self) -> usize {
        self.parameter_index
    }

    #[inline]
    pub fn next_state(&mut self) -> u32 {
        let ShiftTriple(a, b, c) = self.shifts;
        let mut x = self.state;
        x ^= x << a;
        x ^= x >> b;
        x ^= x << c;
        self.state = x;
        x
    }

    #[inline]
    pub fn choose(&mut self, options_count: usize) -> Option<usize> {
        choose(self, options_count)
    }
}

/// Pick one of `options_count` options with a single draw, `next_u32() % options_count`.
/// None when there is nothing to choose from; no draw is consumed in that case.
pub fn choose<R>(rng: &mut R, options_count: usize) -> Option<usize>
    where R: RngCore + ?Sized
{
    if options_count == 0 {
        None
    } else {
        Some(rng.next_u32() as usize % options_count)
    }
}

impl RngCore for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    /// Little endian seed word with the first shift triple.
    fn from_seed(seed: Self::Seed) -> XorShift32 {
        XorShift32::new(u32::from_le_bytes(seed), 0)
    }
}
