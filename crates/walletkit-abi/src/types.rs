//! Parameter types understood by the decoder and the decoded output shape.

use std::fmt;

/// A parameter type name as it appears in a function signature.
///
/// Names the decoder does not model are kept verbatim in
/// [`ParamType::Unknown`] and decoded as raw hex of their head word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    Address,
    Uint256,
    Bool,
    Bytes,
    String,
    AddressArray,
    Unknown(String),
}

impl ParamType {
    /// Whether the value lives in a tail region referenced by an offset word.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParamType::Bytes | ParamType::String | ParamType::AddressArray)
    }

    /// Canonical type name.
    pub fn name(&self) -> &str {
        match self {
            ParamType::Address => "address",
            ParamType::Uint256 => "uint256",
            ParamType::Bool => "bool",
            ParamType::Bytes => "bytes",
            ParamType::String => "string",
            ParamType::AddressArray => "address[]",
            ParamType::Unknown(name) => name,
        }
    }
}

impl From<&str> for ParamType {
    fn from(name: &str) -> Self {
        match name {
            "address" => ParamType::Address,
            "uint256" => ParamType::Uint256,
            "bool" => ParamType::Bool,
            "bytes" => ParamType::Bytes,
            "string" => ParamType::String,
            "address[]" => ParamType::AddressArray,
            other => ParamType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded call: parallel lists of type names and rendered values.
///
/// Both lists always have the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedTuple {
    types: Vec<String>,
    values: Vec<String>,
}

impl DecodedTuple {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            types: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, ty: &ParamType, value: String) {
        self.types.push(ty.name().to_string());
        self.values.push(value);
    }

    /// Number of decoded parameters.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type names in parameter order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Rendered values in parameter order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The `(type, value)` pair at `index`.
    pub fn get(&self, index: usize) -> Option<(&str, &str)> {
        Some((self.types.get(index)?.as_str(), self.values.get(index)?.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Split into `(types, values)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.types, self.values)
    }
}
