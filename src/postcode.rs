use std::collections::HashMap;

use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{CepError, Result};
use crate::models::{Field, Snapshot};
use crate::transport::{HttpTransport, Transport};
use crate::utils::NonBlankExtension;
use crate::xml;

pub const LOOKUP_URL: &str = "https://viacep.com.br/ws/{cep}/json/";

const XML_ROOT: &str = "localidade";

/// Request URL for `postcode`.
pub fn lookup_url(postcode: &str) -> String {
    LOOKUP_URL.replace("{cep}", postcode)
}

/// An address as returned by the lookup service.
///
/// The record starts with at most a postal code. `lookup` fills the remaining
/// fields from the remote service; the setters change single fields. The
/// snapshot read by `to_json` and `to_xml` is rebuilt after each change.
#[derive(Debug)]
pub struct AddressRecord<T = HttpTransport> {
    transport: T,
    values: [Option<String>; 9],
    snapshot: Snapshot
}

impl AddressRecord<HttpTransport> {
    pub fn new(postcode: Option<&str>) -> Result<Self> {
        Ok(Self::with_transport(postcode, HttpTransport::new()?))
    }
}

impl <T: Transport> AddressRecord<T> {
    pub fn with_transport(postcode: Option<&str>, transport: T) -> Self {
        let mut values: [Option<String>; 9] = Default::default();
        values[Field::PostalCode.index()] = postcode.map(str::to_owned);
        let snapshot = Snapshot::from_values(&values);

        AddressRecord { transport, values, snapshot }
    }

    /// Looks up `postcode`, or the stored postal code, and overwrites the fields
    /// the service returned.
    ///
    /// Returns the response status. Responses outside 2xx leave the record
    /// untouched and only report their status.
    pub fn lookup(&mut self, postcode: Option<&str>) -> Result<u16> {
        let postcode = postcode
            .non_blank()
            .or_else(|| self.field(Field::PostalCode).non_blank())
            .ok_or(CepError::MissingInput)?
            .to_owned();

        let url = lookup_url(&postcode);
        debug!("Looking up postal code {} at {}", postcode, url);

        let resp = self.transport.get(&url)?;

        if !resp.is_success() {
            warn!("Lookup of postal code {} failed with status {}", postcode, resp.status);
            return Ok(resp.status);
        }

        let body: HashMap<String, Value> = serde_json::from_str(&resp.body)
            .map_err(|err| CepError::InvalidResponse(Box::new(err)))?;

        if body.contains_key("erro") {
            warn!("Postal code {} is unknown to the lookup service", postcode);
        }

        let mut updated = 0;
        for field in Field::ALL.iter() {
            if let Some(value) = body.get(field.key()) {
                self.values[field.index()] = value_text(value);
                updated += 1;
            }
        }
        self.rebuild_snapshot();

        info!("Mapped {} fields for postal code {}", updated, postcode);
        Ok(resp.status)
    }

    /// Value of the field called `name`, matched case-insensitively against
    /// the API keys and the field names.
    pub fn get(&self, name: &str) -> Result<Option<&str>> {
        let field = name.parse::<Field>()?;
        Ok(self.field(field))
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Variable-arity setter. Takes at most one value; none clears the field.
    pub fn set_args(&mut self, name: &str, values: &[&str]) -> Result<()> {
        let field = name.parse::<Field>()?;
        match values {
            [] => self.assign(field, None),
            [value] => self.assign(field, Some((*value).to_owned())),
            _ => {
                return Err(CepError::InvalidArgument {
                    expected: 1,
                    given: values.len()
                })
            }
        }
        Ok(())
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.assign(field, Some(value.to_owned()));
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.field(Field::PostalCode)
    }

    pub fn street(&self) -> Option<&str> {
        self.field(Field::Street)
    }

    pub fn complement(&self) -> Option<&str> {
        self.field(Field::Complement)
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.field(Field::Neighborhood)
    }

    pub fn city(&self) -> Option<&str> {
        self.field(Field::City)
    }

    pub fn state(&self) -> Option<&str> {
        self.field(Field::State)
    }

    pub fn unit(&self) -> Option<&str> {
        self.field(Field::Unit)
    }

    pub fn ibge_code(&self) -> Option<&str> {
        self.field(Field::IbgeCode)
    }

    pub fn gia_code(&self) -> Option<&str> {
        self.field(Field::GiaCode)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot)?)
    }

    pub fn to_xml(&self) -> Result<String> {
        xml::to_document(XML_ROOT, self.snapshot.iter().map(|(field, value)| {
            (field.key(), value.map_or(Value::Null, |v| Value::String(v.to_owned())))
        }))
    }

    fn assign(&mut self, field: Field, value: Option<String>) {
        self.values[field.index()] = value.clone();
        self.snapshot.update(field, value);
    }

    fn rebuild_snapshot(&mut self) {
        self.snapshot = Snapshot::from_values(&self.values);
    }
}

impl <T> Serialize for AddressRecord<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.snapshot.serialize(serializer)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string())
    }
}
