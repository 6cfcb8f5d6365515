use crate::errors::*;
use crate::prng::XorShift32;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 10;
pub const DEFAULT_SEED: u32 = 23;
pub const DEFAULT_PARAMETER_INDEX: isize = 0;

/// Everything needed to reproduce a maze: the grid size, the generator seed and which xorshift
/// shift triple the generator uses.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub seed: u32,
    pub parameter_index: isize,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: DEFAULT_SEED,
            parameter_index: DEFAULT_PARAMETER_INDEX,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            Err(ErrorKind::InvalidDimensions(self.rows, self.columns).into())
        } else {
            Ok(())
        }
    }

    /// A generator positioned at the start of this configuration's sequence.
    pub fn rng(&self) -> XorShift32 {
        XorShift32::new(self.seed, self.parameter_index)
    }
}


#[cfg(test)]
mod tests {

    use rand_core::RngCore;

    use super::*;

    #[test]
    fn defaults() {
        let config = MazeConfig::default();
        assert_eq!((config.rows, config.columns), (10, 10));
        assert_eq!(config.seed, 23);
        assert_eq!(config.parameter_index, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_do_not_validate() {
        let config = MazeConfig { rows: 0, ..MazeConfig::default() };
        assert!(matches!(*config.validate().unwrap_err().kind(),
                         ErrorKind::InvalidDimensions(0, 10)));
        let config = MazeConfig { columns: 0, ..MazeConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rng_restarts_the_sequence() {
        let config = MazeConfig { seed: 99, parameter_index: 17, ..MazeConfig::default() };
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.next_u32(), b.next_u32());
        assert_eq!(a.parameter_index(), 17);
    }
}
