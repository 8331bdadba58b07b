pub mod ktuvit;
pub mod traits;

pub use ktuvit::{KtuvitClient, KtuvitError};
pub use traits::{LanguageListing, SearchOutcome, SubtitleProvider, SubtitleQuery, SubtitleSummary};
