//! Post editing: the content buffer, toolbar insertions, image upload,
//! and the session-level save/publish lifecycle.

mod buffer;
mod format;
mod session;
mod upload;

pub use buffer::{ContentBuffer, Selection};
pub use format::{BULLET, PLACEHOLDER_LINK_TEXT, PLACEHOLDER_URL};
pub use session::{EditorSession, SaveError};
pub use upload::{ImageFile, data_uri, upload_images};
