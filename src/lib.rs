// cargo watch -x 'fmt' -x 'test'

mod aggregate;
mod decompose;
mod error;
pub mod ipv4;
mod subtract;

pub use aggregate::{aggregate, aggregate_cidrs};
pub use decompose::range_to_blocks;
pub use error::CidrError;
pub use ipv4::Ipv4;
pub use subtract::{is_valid_cidr, subtract, subtract_to_strings};
