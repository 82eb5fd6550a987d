//! pn-import: builds pipe networks from pipe hydraulics data-sheet workbooks.

pub mod error;
pub mod importer;
pub mod layout;
pub mod workbook;

pub use error::{ImportError, ImportResult};
pub use importer::{AppliedDefault, ImportReport, ImportedNetwork, import_network};
pub use workbook::{Cell, Sheet, Workbook};
