use super::enumerant::Enumerant;
use super::error::EnumerationError;
use super::registry::Enumeration;
use std::fmt;

/// A total map from every enumerant of one registry to a value.
///
/// Entries follow the declaration order of the registry, so lookups resolve the
/// enumerant's position and index straight into the value list.
pub struct EnumerationMap<T, V> {
    enumeration: Enumeration<T>,
    values: Vec<V>,
}

impl<T, V> EnumerationMap<T, V> {
    /// Computes one value per enumerant of `enumeration`.
    pub fn new<F>(enumeration: &Enumeration<T>, f: F) -> Self
    where
        F: FnMut(&Enumerant<T>) -> V,
    {
        let values = enumeration.values().iter().map(f).collect();
        Self { enumeration: enumeration.clone(), values }
    }

    #[must_use]
    pub const fn enumeration(&self) -> &Enumeration<T> {
        &self.enumeration
    }

    /// # Errors
    /// Returns [`EnumerationError::UnknownValue`] if `enumerant` is not a member of the
    /// mapped registry.
    pub fn get(&self, enumerant: &Enumerant<T>) -> Result<&V, EnumerationError> {
        let position = self.position(enumerant)?;
        Ok(&self.values[position])
    }

    /// # Errors
    /// Returns [`EnumerationError::UnknownValue`] if `enumerant` is not a member of the
    /// mapped registry.
    pub fn get_mut(&mut self, enumerant: &Enumerant<T>) -> Result<&mut V, EnumerationError> {
        let position = self.position(enumerant)?;
        Ok(&mut self.values[position])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Enumerant<T>, &V)> {
        self.enumeration.values().iter().zip(self.values.iter())
    }

    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    fn position(&self, enumerant: &Enumerant<T>) -> Result<usize, EnumerationError> {
        self.enumeration.position(enumerant).ok_or_else(|| EnumerationError::UnknownValue {
            message: format!("{} is not a member of {}", enumerant, self.enumeration.host()).into(),
            context: Some("Looking up an enumeration map".into()),
        })
    }
}

impl<T, V: Clone> Clone for EnumerationMap<T, V> {
    fn clone(&self) -> Self {
        Self { enumeration: self.enumeration.clone(), values: self.values.clone() }
    }
}

impl<T, V: fmt::Debug> fmt::Debug for EnumerationMap<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.enumeration.keys().iter().zip(self.values.iter()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::EnumerationType;

    #[test]
    fn maps_every_enumerant() {
        let host = EnumerationType::root("Direction");
        let directions = Enumeration::of(&host, ["NORTH", "EAST", "SOUTH", "WEST"]).unwrap();
        let mut degrees = EnumerationMap::new(&directions, |direction| {
            directions.values().iter().position(|d| d == direction).unwrap_or_default() * 90
        });

        let south = directions.value_of("SOUTH").unwrap();
        assert_eq!(*degrees.get(south).unwrap(), 180);

        *degrees.get_mut(south).unwrap() += 1;
        assert_eq!(degrees.values(), [0, 90, 181, 270]);
        assert_eq!(degrees.iter().len(), 4);
    }

    #[test]
    fn foreign_enumerant_is_rejected() {
        let axis = EnumerationType::root("Axis");
        let axes = Enumeration::of(&axis, ["X", "Y"]).unwrap();
        let other = EnumerationType::root("Axis");
        let others = Enumeration::of(&other, ["X"]).unwrap();

        let labels = EnumerationMap::new(&axes, |axis| axis.name().to_lowercase());
        let foreign = others.value_of("X").unwrap();
        assert!(matches!(labels.get(foreign), Err(EnumerationError::UnknownValue { .. })));
        assert_eq!(format!("{labels:?}"), r#"{"X": "x", "Y": "y"}"#);
    }
}
