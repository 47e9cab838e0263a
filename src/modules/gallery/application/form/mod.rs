pub mod reducer;
pub mod session;

pub use reducer::{FormEvent, FormMode, FormState, GalleryForm};
pub use session::{GalleryFormSession, SubmitOutcome};
