//! Portable column types and the table mapping them onto an engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// A portable column type, independent of any engine.
///
/// Each variant carries the numeric type code portable data-access layers
/// use to name it (see [`AbstractColumnType::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractColumnType {
    /// The SQL NULL type.
    Null,
    /// Single bit, used for booleans.
    Bit,
    /// Fixed-width character.
    Char,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Date and time.
    Timestamp,
    /// Arbitrary-precision numeric.
    Numeric,
    /// Floating point.
    Float,
    /// Double-precision floating point.
    Double,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Variable-length character string.
    Varchar,
    /// Long variable-length character string.
    LongVarchar,
    /// National (Unicode) variable-length character string.
    NVarchar,
    /// Long national variable-length character string.
    LongNVarchar,
    /// Binary large object.
    Blob,
    /// Character large object.
    Clob,
    /// National character large object.
    NClob,
    /// Fixed-width binary.
    Binary,
    /// Long variable-length binary.
    LongVarBinary,
}

impl AbstractColumnType {
    /// Every abstract type, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Null,
        Self::Bit,
        Self::Char,
        Self::Integer,
        Self::BigInt,
        Self::Timestamp,
        Self::Numeric,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Varchar,
        Self::LongVarchar,
        Self::NVarchar,
        Self::LongNVarchar,
        Self::Blob,
        Self::Clob,
        Self::NClob,
        Self::Binary,
        Self::LongVarBinary,
    ];

    /// Types stored as integers.
    pub const INTEGER_LIKE: &'static [Self] = &[
        Self::Bit,
        Self::Char,
        Self::Integer,
        Self::BigInt,
        Self::Timestamp,
    ];

    /// Types stored as floating point.
    pub const REAL_LIKE: &'static [Self] =
        &[Self::Numeric, Self::Float, Self::Double, Self::Decimal];

    /// Types stored as text.
    pub const TEXT_LIKE: &'static [Self] = &[
        Self::Varchar,
        Self::LongVarchar,
        Self::NVarchar,
        Self::LongNVarchar,
    ];

    /// Types stored as raw bytes.
    pub const BLOB_LIKE: &'static [Self] = &[
        Self::Blob,
        Self::Clob,
        Self::NClob,
        Self::Binary,
        Self::LongVarBinary,
    ];

    /// Returns the portable numeric type code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Null => 0,
            Self::Bit => -7,
            Self::Char => 1,
            Self::Integer => 4,
            Self::BigInt => -5,
            Self::Timestamp => 93,
            Self::Numeric => 2,
            Self::Float => 6,
            Self::Double => 8,
            Self::Decimal => 3,
            Self::Varchar => 12,
            Self::LongVarchar => -1,
            Self::NVarchar => -9,
            Self::LongNVarchar => -16,
            Self::Blob => 2004,
            Self::Clob => 2005,
            Self::NClob => 2011,
            Self::Binary => -2,
            Self::LongVarBinary => -4,
        }
    }

    /// Looks up the abstract type for a portable type code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }

    /// Position of this type in [`Self::ALL`].
    const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i32> for AbstractColumnType {
    type Error = DialectError;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code).ok_or(DialectError::UnknownTypeCode(code))
    }
}

impl fmt::Display for AbstractColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A total mapping from every [`AbstractColumnType`] to a physical type `P`.
///
/// Built once through [`TypeMappingTable::builder`]; lookups afterwards can
/// not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMappingTable<P> {
    // One entry per type, in `AbstractColumnType::ALL` order.
    entries: Vec<P>,
}

impl<P: Copy> TypeMappingTable<P> {
    /// Starts registering mappings.
    #[must_use]
    pub const fn builder() -> TypeMappingTableBuilder<P> {
        TypeMappingTableBuilder {
            entries: [None; AbstractColumnType::ALL.len()],
            duplicate: None,
        }
    }

    /// Returns the physical type backing `ty`.
    #[must_use]
    pub fn physical_type_for(&self, ty: AbstractColumnType) -> P {
        self.entries[ty.index()]
    }

    /// Iterates over every `(abstract, physical)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (AbstractColumnType, P)> + '_ {
        AbstractColumnType::ALL
            .into_iter()
            .map(|ty| (ty, self.entries[ty.index()]))
    }
}

/// Collects type registrations and validates them into a [`TypeMappingTable`].
#[derive(Debug, Clone)]
pub struct TypeMappingTableBuilder<P> {
    entries: [Option<P>; AbstractColumnType::ALL.len()],
    duplicate: Option<AbstractColumnType>,
}

impl<P: Copy> TypeMappingTableBuilder<P> {
    /// Maps a single abstract type.
    #[must_use]
    pub fn register(mut self, ty: AbstractColumnType, physical: P) -> Self {
        let slot = &mut self.entries[ty.index()];
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(ty);
        }
        *slot = Some(physical);
        self
    }

    /// Maps every type in `group` to the same physical type.
    #[must_use]
    pub fn register_group(self, group: &[AbstractColumnType], physical: P) -> Self {
        group
            .iter()
            .fold(self, |builder, &ty| builder.register(ty, physical))
    }

    /// Validates the registrations.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::DuplicateMapping`] if a type was registered
    /// twice, or [`DialectError::UnmappedType`] if any type was left out.
    pub fn build(self) -> Result<TypeMappingTable<P>> {
        if let Some(ty) = self.duplicate {
            return Err(DialectError::DuplicateMapping(ty));
        }
        let entries = AbstractColumnType::ALL
            .into_iter()
            .map(|ty| self.entries[ty.index()].ok_or(DialectError::UnmappedType(ty)))
            .collect::<Result<Vec<P>>>()?;
        Ok(TypeMappingTable { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> TypeMappingTableBuilder<&'static str> {
        TypeMappingTable::builder()
            .register(AbstractColumnType::Null, "NULL")
            .register_group(AbstractColumnType::INTEGER_LIKE, "INTEGER")
            .register_group(AbstractColumnType::REAL_LIKE, "REAL")
            .register_group(AbstractColumnType::TEXT_LIKE, "TEXT")
            .register_group(AbstractColumnType::BLOB_LIKE, "BLOB")
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, ty) in AbstractColumnType::ALL.into_iter().enumerate() {
            assert_eq!(ty.index(), index, "{ty}");
        }
    }

    #[test]
    fn test_groups_partition_all_but_null() {
        let groups = [
            AbstractColumnType::INTEGER_LIKE,
            AbstractColumnType::REAL_LIKE,
            AbstractColumnType::TEXT_LIKE,
            AbstractColumnType::BLOB_LIKE,
        ];
        for ty in AbstractColumnType::ALL {
            let hits = groups.iter().filter(|group| group.contains(&ty)).count();
            let expected = usize::from(ty != AbstractColumnType::Null);
            assert_eq!(hits, expected, "{ty} should be in exactly {expected} group(s)");
        }
    }

    #[test]
    fn test_type_codes_round_trip_and_are_unique() {
        for ty in AbstractColumnType::ALL {
            assert_eq!(AbstractColumnType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(AbstractColumnType::from_code(12), Some(AbstractColumnType::Varchar));
        assert_eq!(AbstractColumnType::from_code(-7), Some(AbstractColumnType::Bit));
    }

    #[test]
    fn test_try_from_unknown_code() {
        let err = AbstractColumnType::try_from(1111).unwrap_err();
        assert!(matches!(err, DialectError::UnknownTypeCode(1111)));
    }

    #[test]
    fn test_build_full_table() {
        let table = full_builder().build().unwrap();
        assert_eq!(table.physical_type_for(AbstractColumnType::Null), "NULL");
        assert_eq!(table.physical_type_for(AbstractColumnType::BigInt), "INTEGER");
        assert_eq!(table.physical_type_for(AbstractColumnType::Decimal), "REAL");
        assert_eq!(table.physical_type_for(AbstractColumnType::NVarchar), "TEXT");
        assert_eq!(table.physical_type_for(AbstractColumnType::Clob), "BLOB");
        assert_eq!(table.iter().count(), AbstractColumnType::ALL.len());
    }

    #[test]
    fn test_each_type_gets_its_own_entry() {
        let table = AbstractColumnType::ALL
            .into_iter()
            .fold(TypeMappingTable::builder(), |builder, ty| {
                builder.register(ty, ty.code())
            })
            .build()
            .unwrap();
        for ty in AbstractColumnType::ALL {
            assert_eq!(table.physical_type_for(ty), ty.code(), "{ty}");
        }
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs.len(), AbstractColumnType::ALL.len());
        assert_eq!(pairs[0], (AbstractColumnType::Null, 0));
    }

    #[test]
    fn test_build_rejects_gaps() {
        let err = TypeMappingTable::builder()
            .register_group(AbstractColumnType::INTEGER_LIKE, "INTEGER")
            .build()
            .unwrap_err();
        assert!(matches!(err, DialectError::UnmappedType(AbstractColumnType::Null)));
    }

    #[test]
    fn test_build_rejects_overlaps() {
        let err = full_builder()
            .register(AbstractColumnType::Varchar, "BLOB")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DialectError::DuplicateMapping(AbstractColumnType::Varchar)
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&AbstractColumnType::LongNVarchar).unwrap();
        assert_eq!(json, "\"long_n_varchar\"");
        let ty: AbstractColumnType = serde_json::from_str("\"big_int\"").unwrap();
        assert_eq!(ty, AbstractColumnType::BigInt);
    }
}
