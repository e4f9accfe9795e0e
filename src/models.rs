use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::CepError;

/// One of the nine address fields understood by the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PostalCode,
    Street,
    Complement,
    Neighborhood,
    City,
    State,
    Unit,
    IbgeCode,
    GiaCode
}

impl Field {
    /// All fields, in snapshot order.
    pub const ALL: [Field; 9] = [
        Field::PostalCode,
        Field::Street,
        Field::Complement,
        Field::Neighborhood,
        Field::City,
        Field::State,
        Field::Unit,
        Field::IbgeCode,
        Field::GiaCode
    ];

    /// Key used by the remote API, and by the JSON and XML renderings.
    pub fn key(&self) -> &'static str {
        match self {
            Field::PostalCode => "cep",
            Field::Street => "logradouro",
            Field::Complement => "complemento",
            Field::Neighborhood => "bairro",
            Field::City => "localidade",
            Field::State => "uf",
            Field::Unit => "unidade",
            Field::IbgeCode => "ibge",
            Field::GiaCode => "gia"
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::PostalCode => "postalCode",
            Field::Street => "street",
            Field::Complement => "complement",
            Field::Neighborhood => "neighborhood",
            Field::City => "city",
            Field::State => "state",
            Field::Unit => "unit",
            Field::IbgeCode => "ibgeCode",
            Field::GiaCode => "giaCode"
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Case-insensitive lookup by API key or by name.
    pub fn from_name(name: &str) -> Option<Field> {
        let name = name.to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.key() == name || f.name().to_lowercase() == name)
    }
}

impl FromStr for Field {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| CepError::UnknownAttribute(s.to_owned()))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Field values as last rendered from an address record, in `Field::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    entries: Vec<(Field, Option<String>)>
}

impl Snapshot {
    pub fn from_values(values: &[Option<String>; 9]) -> Snapshot {
        Snapshot {
            entries: Field::ALL
                .iter()
                .map(|f| (*f, values[f.index()].clone()))
                .collect()
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, value)| value.as_deref())
    }

    pub(crate) fn update(&mut self, field: Field, value: Option<String>) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> {
        self.entries.iter().map(|(f, value)| (*f, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
