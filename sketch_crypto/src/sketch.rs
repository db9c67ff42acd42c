//! Plaintext sketch model. Building sketches from events is done elsewhere, this only carries them to the encrypter.

use crate::error::SketchError;
use ark_std::vec::Vec;
use serde::{Deserialize, Serialize};

/// How values of the same register are combined when sketches are aggregated. Encryption treats all
/// values alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregator {
    Unique,
    Sum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub aggregator: Aggregator,
}

impl ValueSpec {
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }
}

/// Describes the values of every register of a sketch, in order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchConfig {
    values: Vec<ValueSpec>,
}

impl SketchConfig {
    pub fn new(values: Vec<ValueSpec>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[ValueSpec] {
        &self.values
    }

    pub fn value_spec_count(&self) -> usize {
        self.values.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// Bucket of the register
    pub index: u64,
    /// One value per value spec of the sketch's config
    pub values: Vec<u64>,
}

impl Register {
    pub fn new(index: u64, values: Vec<u64>) -> Self {
        Self { index, values }
    }
}

/// Registers keep their insertion order. The position of a ciphertext in an encrypted sketch is the only
/// thing tying it to its register.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sketch {
    config: SketchConfig,
    registers: Vec<Register>,
}

impl Sketch {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            registers: Vec::new(),
        }
    }

    pub fn with_registers(config: SketchConfig, registers: Vec<Register>) -> Self {
        Self { config, registers }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    pub fn add_register(&mut self, register: Register) {
        self.registers.push(register)
    }

    /// Checks that every register has exactly one value per value spec. A mismatch would shift every
    /// following ciphertext to the wrong register.
    pub fn validate(&self) -> Result<(), SketchError> {
        let expected = self.config.value_spec_count();
        for (i, register) in self.registers.iter().enumerate() {
            if register.values.len() != expected {
                return Err(SketchError::IncorrectNumberOfValues(
                    i,
                    expected,
                    register.values.len(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::vec;

    #[test]
    fn registers_keep_insertion_order() {
        let config = SketchConfig::new(vec![
            ValueSpec::new(Aggregator::Unique),
            ValueSpec::new(Aggregator::Sum),
        ]);
        assert_eq!(config.value_spec_count(), 2);
        assert_eq!(config.values()[1].aggregator, Aggregator::Sum);

        let mut sketch = Sketch::new(config.clone());
        for index in [9, 3, 7] {
            sketch.add_register(Register::new(index, vec![1, index]));
        }
        assert_eq!(sketch.register_count(), 3);
        assert_eq!(
            sketch.registers().iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![9, 3, 7]
        );
        assert_eq!(sketch.config(), &config);
        assert!(sketch.validate().is_ok());
    }

    #[test]
    fn validation_catches_misaligned_registers() {
        let config = SketchConfig::new(vec![ValueSpec::new(Aggregator::Sum); 2]);
        let sketch = Sketch::with_registers(
            config,
            vec![
                Register::new(1, vec![1, 2]),
                Register::new(2, vec![1]),
                Register::new(3, vec![1, 2, 3]),
            ],
        );
        assert_eq!(
            sketch.validate(),
            Err(SketchError::IncorrectNumberOfValues(1, 2, 1))
        );

        // No value specs means registers carry only an index
        let sketch = Sketch::with_registers(
            SketchConfig::default(),
            vec![Register::new(1, vec![]), Register::new(1, vec![5])],
        );
        assert_eq!(
            sketch.validate(),
            Err(SketchError::IncorrectNumberOfValues(1, 0, 1))
        );
    }

    #[test]
    fn serde_roundtrip() {
        let sketch = Sketch::with_registers(
            SketchConfig::new(vec![
                ValueSpec::new(Aggregator::Unique),
                ValueSpec::new(Aggregator::Sum),
            ]),
            vec![Register::new(12, vec![1, 40]), Register::new(0, vec![0, 3])],
        );
        let ser = serde_json::to_string(&sketch).unwrap();
        let deser = serde_json::from_str::<Sketch>(&ser).unwrap();
        assert_eq!(sketch, deser);
    }
}
