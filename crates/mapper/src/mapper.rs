// internal modules
use crate::error::{Error, Result};

// labeltools modules
use labeltools_utils::{Dtype, Label};

// external crates
use log::{debug, warn};

// standard library
use std::collections::HashMap;

/// Finite mapping from one set of labels to another
///
/// The mapping is built once from paired `domain` and `codomain` lists and
/// then applied to any number of label arrays (see the `apply*` methods).
///
/// The `D` and `C` types are the "native" widths of the mapping. They are
/// independent of each other and of the arrays the mapping is later applied
/// to. A `u8`-keyed mapping can be applied to a `u64` volume: values that do
/// not fit in `u8` simply have no entry, and are never truncated before the
/// lookup.
///
/// ```rust
/// # use labeltools_mapper::LabelMapper;
/// let domain: Vec<u8> = (0..10).collect();
/// let codomain: Vec<u16> = (100..110).collect();
///
/// let mapper = LabelMapper::new(&domain, &codomain).unwrap();
/// assert_eq!(mapper.len(), 10);
/// assert_eq!(mapper.get(5), Some(105));
///
/// // Lookups accept any width
/// assert_eq!(mapper.map_value(5_u64), Some(105));
/// assert_eq!(mapper.map_value(261_u64), None);
/// ```
///
/// ## Duplicate domain labels
///
/// If the same label appears more than once in the domain, the last pairing
/// wins and a warning is logged with the number of entries overridden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelMapper<D: Label, C: Label> {
    mapping: HashMap<D, C>,
    codomain_max: Option<C>,
}

impl<D: Label, C: Label> LabelMapper<D, C> {
    /// Build the mapping `domain[i] -> codomain[i]`
    ///
    /// Fails with [MismatchedLengths](Error::MismatchedLengths) if the lists
    /// are not the same length.
    pub fn new(domain: &[D], codomain: &[C]) -> Result<Self> {
        if domain.len() != codomain.len() {
            return Err(Error::MismatchedLengths {
                domain: domain.len(),
                codomain: codomain.len(),
            });
        }

        let mut mapping = HashMap::with_capacity(domain.len());
        let mut overridden = 0_usize;
        for (&key, &value) in domain.iter().zip(codomain) {
            if mapping.insert(key, value).is_some() {
                overridden += 1;
            }
        }

        if overridden > 0 {
            warn!("{overridden} duplicate domain labels, keeping the last value of each");
        }

        debug!(
            "Built {}->{} label mapping with {} entries",
            D::DTYPE,
            C::DTYPE,
            mapping.len()
        );

        Ok(Self::from(mapping))
    }

    /// Number of distinct domain labels
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// True if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Native width of the domain
    pub fn domain_dtype(&self) -> Dtype {
        D::DTYPE
    }

    /// Native width of the codomain, and of every array produced by `apply`
    pub fn codomain_dtype(&self) -> Dtype {
        C::DTYPE
    }

    /// Codomain label for a domain label of the native width
    pub fn get(&self, key: D) -> Option<C> {
        self.mapping.get(&key).copied()
    }

    /// Codomain label for a value of any width
    ///
    /// The value is only looked up if it can be represented in the domain
    /// width. Anything wider cannot be a domain label and returns `None`.
    #[inline]
    pub fn map_value<I: Label>(&self, value: I) -> Option<C> {
        D::from_u64(value.to_u64()).and_then(|key| self.mapping.get(&key).copied())
    }

    /// Largest codomain label, used to decide whether in-place writes can
    /// overflow a narrower target
    pub(crate) fn codomain_max(&self) -> Option<C> {
        self.codomain_max
    }
}

impl<D: Label, C: Label> From<HashMap<D, C>> for LabelMapper<D, C> {
    fn from(mapping: HashMap<D, C>) -> Self {
        let codomain_max = mapping.values().max().copied();
        Self {
            mapping,
            codomain_max,
        }
    }
}

impl<D: Label, C: Label> FromIterator<(D, C)> for LabelMapper<D, C> {
    fn from_iter<T: IntoIterator<Item = (D, C)>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<D, C>>())
    }
}
