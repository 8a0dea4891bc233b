mod row;
mod story;

pub use row::{CommentPreview, StoryRow};
pub use story::{CommentIdentity, LastComment, Metadata, Story};
