//! comment-box - format text into fixed-width decorated banner comments
//!
//! The pipeline is: tokenize each input line into whitespace runs
//! ([`token`]), wrap to the content width ([`wrap`]), frame each wrapped
//! line with style markers ([`border`]), and stack the bordered body
//! between a top and bottom filler row ([`comment`]).

pub mod border;
pub mod comment;
pub mod error;
pub mod style;
pub mod text;
pub mod token;
pub mod wrap;

pub use border::{border_term, render_body_line};
pub use comment::assemble;
pub use error::LayoutError;
pub use style::{Band, CommentStyle, StyleId};
pub use text::expand_tabs;
pub use token::tokenize;
pub use wrap::wrap;

/// Default total block width.
pub const DEFAULT_WIDTH: usize = 79;
/// Default tab-stop interval for input expansion.
pub const DEFAULT_TAB_WIDTH: usize = 8;
