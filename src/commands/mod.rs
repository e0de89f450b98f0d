pub mod browse;
pub mod list;
pub mod run;
pub mod show;

pub use browse::*;
pub use list::*;
pub use run::*;
pub use show::*;
