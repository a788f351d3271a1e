//! The identifier categories a Naming Conventions puzzle can ask about

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of puzzle variants
pub const DATA_TYPE_COUNT: usize = 10;

/// Kind of identifier whose naming convention the player must set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    Class,
    Constructor,
    Method,
    Argument,
    Local,
    Constant,
    Field,
    Property,
    Delegate,
    Enum,
}

impl DataType {
    /// All variants in generation order
    pub const ALL: [DataType; DATA_TYPE_COUNT] = [
        DataType::Class,
        DataType::Constructor,
        DataType::Method,
        DataType::Argument,
        DataType::Local,
        DataType::Constant,
        DataType::Field,
        DataType::Property,
        DataType::Delegate,
        DataType::Enum,
    ];

    /// Position in generation order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Variant at a position in generation order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name, as shown on the module
    pub fn name(self) -> &'static str {
        match self {
            DataType::Class => "Class",
            DataType::Constructor => "Constructor",
            DataType::Method => "Method",
            DataType::Argument => "Argument",
            DataType::Local => "Local",
            DataType::Constant => "Constant",
            DataType::Field => "Field",
            DataType::Property => "Property",
            DataType::Delegate => "Delegate",
            DataType::Enum => "Enum",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .iter()
            .copied()
            .find(|data_type| data_type.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown data type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_order() {
        for (i, data_type) in DataType::ALL.iter().enumerate() {
            assert_eq!(data_type.index(), i);
            assert_eq!(DataType::from_index(i), Some(*data_type));
        }
        assert_eq!(DataType::from_index(DATA_TYPE_COUNT), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("constructor".parse::<DataType>().unwrap(), DataType::Constructor);
        assert_eq!(" ENUM ".parse::<DataType>().unwrap(), DataType::Enum);
        assert!("Struct".parse::<DataType>().is_err());
    }
}
