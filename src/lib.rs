//! Client for the ViaCEP postal code ("CEP") lookup service.
//!
//! ```no_run
//! use cep_finder::AddressRecord;
//!
//! # fn main() -> cep_finder::Result<()> {
//! let mut record = AddressRecord::new(Some("01001000"))?;
//! if record.lookup(None)? == 200 {
//!     println!("{:?}", record.city());
//!     println!("{}", record.to_json()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod postcode;
pub mod transport;
mod utils;
mod xml;


pub use crate::error::{CepError, Result};
pub use crate::models::{Field, Snapshot};
pub use crate::postcode::{lookup_url, AddressRecord, LOOKUP_URL};
pub use crate::transport::{HttpTransport, Transport, TransportResponse, USER_AGENT};
