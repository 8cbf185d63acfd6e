//! One module per encoder family. Each encoder is a small configuration struct
//! implementing [`SymbologyEncoder`](crate::core::SymbologyEncoder); all tables are
//! constants, so encoders can be shared freely between threads.

pub mod codabar;
pub mod code11;
pub mod code128;
pub mod code39;
pub mod code93;
pub mod ean;
pub mod gs1;
pub mod msi;
pub mod pharmacode;
pub mod postal;
pub mod supplement;
pub mod telepen;
pub mod two_of_five;
pub mod upc;

pub use codabar::Codabar;
pub use code11::Code11;
pub use code128::Code128;
pub use code39::Code39;
pub use code93::Code93;
pub use ean::{Ean8, Ean13, Isbn, Jan13};
pub use msi::{Msi, MsiCheck};
pub use pharmacode::Pharmacode;
pub use postal::{Fim, Postnet};
pub use supplement::{UpcSupplement2, UpcSupplement5};
pub use telepen::Telepen;
pub use two_of_five::{Interleaved2of5, Itf14, Standard2of5};
pub use upc::{UpcA, UpcE};
