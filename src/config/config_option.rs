use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A configurable value, together with its name and bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || value > self.max {
            log::error!(target: targets::CONFIG, "! {} is out of bounds", self.name);
            return Err(err::ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
